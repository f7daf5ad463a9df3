use async_trait::async_trait;

use crate::modules::services::application::ports::outgoing::{
    NewServiceData, ProcessStep, ServiceRepository, ServiceRepositoryError, ServiceView,
};
use crate::shared::validation::{optional_text, required_slug, required_text, Violations};

// ========================= Create Service Command =========================

pub(crate) fn string_list(
    v: &mut Violations,
    field: &str,
    value: Option<Vec<String>>,
) -> Vec<String> {
    let items = value.unwrap_or_default();
    let mut out = Vec::with_capacity(items.len());
    for item in items {
        let trimmed = item.trim().to_string();
        if trimmed.is_empty() {
            v.add(field, &format!("{field} must not contain empty entries"));
            return Vec::new();
        }
        out.push(trimmed);
    }
    out
}

pub(crate) fn process_steps(
    v: &mut Violations,
    value: Option<Vec<ProcessStep>>,
) -> Vec<ProcessStep> {
    let steps = value.unwrap_or_default();
    for step in &steps {
        if step.title.trim().is_empty() || step.description.trim().is_empty() {
            v.add(
                "process_steps",
                "process_steps entries need a title and a description",
            );
            return Vec::new();
        }
    }
    steps
}

#[derive(Debug, Clone)]
pub struct CreateServiceCommand {
    data: NewServiceData,
}

impl CreateServiceCommand {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        title: Option<String>,
        slug: Option<String>,
        description: Option<String>,
        icon: Option<String>,
        link: Option<String>,
        gradient: Option<String>,
        order_index: Option<i32>,
        active: Option<bool>,
        overview: Option<String>,
        features: Option<Vec<String>>,
        steps: Option<Vec<ProcessStep>>,
        requirements: Option<Vec<String>>,
        benefits: Option<Vec<String>>,
        meta_description: Option<String>,
        keywords: Option<String>,
    ) -> Result<Self, Violations> {
        let mut v = Violations::new();

        let title = required_text(&mut v, "title", title, 150);
        let slug = required_slug(&mut v, "slug", slug);
        let description = required_text(&mut v, "description", description, 2000);
        let icon = required_text(&mut v, "icon", icon, 100);
        let link = optional_text(&mut v, "link", link, 255);
        let gradient = optional_text(&mut v, "gradient", gradient, 255);
        let overview = optional_text(&mut v, "overview", overview, 10_000);
        let features = string_list(&mut v, "features", features);
        let process_steps = process_steps(&mut v, steps);
        let requirements = string_list(&mut v, "requirements", requirements);
        let benefits = string_list(&mut v, "benefits", benefits);
        let meta_description = optional_text(&mut v, "meta_description", meta_description, 255);
        let keywords = optional_text(&mut v, "keywords", keywords, 255);

        if !v.is_empty() {
            return Err(v);
        }

        Ok(Self {
            data: NewServiceData {
                title,
                slug,
                description,
                icon,
                link,
                gradient,
                order_index: order_index.unwrap_or(0),
                active: active.unwrap_or(true),
                overview,
                features,
                process_steps,
                requirements,
                benefits,
                meta_description,
                keywords,
            },
        })
    }

    pub fn data(&self) -> &NewServiceData {
        &self.data
    }
}

// ========================= Create Service Use Case =========================

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateServiceError {
    #[error("Slug is already in use")]
    SlugTaken,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ICreateServiceUseCase: Send + Sync {
    async fn execute(&self, command: CreateServiceCommand)
        -> Result<ServiceView, CreateServiceError>;
}

#[derive(Debug, Clone)]
pub struct CreateServiceUseCase<R>
where
    R: ServiceRepository + Send + Sync,
{
    repository: R,
}

impl<R> CreateServiceUseCase<R>
where
    R: ServiceRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ICreateServiceUseCase for CreateServiceUseCase<R>
where
    R: ServiceRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: CreateServiceCommand,
    ) -> Result<ServiceView, CreateServiceError> {
        self.repository
            .create(command.data().clone())
            .await
            .map_err(|e| match e {
                ServiceRepositoryError::SlugTaken => CreateServiceError::SlugTaken,
                other => CreateServiceError::RepositoryError(other.to_string()),
            })
    }
}
