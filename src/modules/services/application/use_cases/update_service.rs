use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::services::application::ports::outgoing::{
    ProcessStep, ServicePatch, ServiceRepository, ServiceRepositoryError, ServiceView,
};
use crate::shared::validation::{is_valid_slug, Violations};

use super::create_service::{process_steps, string_list};

// ========================= Update Service Command =========================

#[derive(Debug, Clone)]
pub struct UpdateServiceCommand {
    id: Uuid,
    patch: ServicePatch,
}

fn patch_text(
    v: &mut Violations,
    field: &str,
    value: Option<String>,
    max_len: usize,
) -> Option<String> {
    let raw = value?;
    let trimmed = raw.trim().to_string();
    if trimmed.is_empty() {
        v.add(field, &format!("{field} must not be empty"));
        return None;
    }
    if trimmed.chars().count() > max_len {
        v.add(field, &format!("{field} must be at most {max_len} characters"));
        return None;
    }
    Some(trimmed)
}

impl UpdateServiceCommand {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: Uuid,
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

        let slug = slug.map(|s| s.trim().to_lowercase()).inspect(|s| {
            if !is_valid_slug(s) {
                v.add("slug", "slug must contain only lowercase letters, digits and hyphens");
            }
        });

        let features = features.map(|f| string_list(&mut v, "features", Some(f)));
        let process_steps = steps.map(|s| process_steps(&mut v, Some(s)));
        let requirements = requirements.map(|r| string_list(&mut v, "requirements", Some(r)));
        let benefits = benefits.map(|b| string_list(&mut v, "benefits", Some(b)));

        let patch = ServicePatch {
            title: patch_text(&mut v, "title", title, 150),
            slug,
            description: patch_text(&mut v, "description", description, 2000),
            icon: patch_text(&mut v, "icon", icon, 100),
            link: patch_text(&mut v, "link", link, 255),
            gradient: patch_text(&mut v, "gradient", gradient, 255),
            order_index,
            active,
            overview: patch_text(&mut v, "overview", overview, 10_000),
            features,
            process_steps,
            requirements,
            benefits,
            meta_description: patch_text(&mut v, "meta_description", meta_description, 255),
            keywords: patch_text(&mut v, "keywords", keywords, 255),
        };

        if !v.is_empty() {
            return Err(v);
        }

        Ok(Self { id, patch })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn patch(&self) -> &ServicePatch {
        &self.patch
    }
}

// ========================= Update Service Use Case =========================

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateServiceError {
    #[error("Service not found")]
    NotFound,

    #[error("Slug is already in use")]
    SlugTaken,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IUpdateServiceUseCase: Send + Sync {
    async fn execute(&self, command: UpdateServiceCommand)
        -> Result<ServiceView, UpdateServiceError>;
}

#[derive(Debug, Clone)]
pub struct UpdateServiceUseCase<R>
where
    R: ServiceRepository + Send + Sync,
{
    repository: R,
}

impl<R> UpdateServiceUseCase<R>
where
    R: ServiceRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IUpdateServiceUseCase for UpdateServiceUseCase<R>
where
    R: ServiceRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: UpdateServiceCommand,
    ) -> Result<ServiceView, UpdateServiceError> {
        self.repository
            .update(command.id(), command.patch().clone())
            .await
            .map_err(|e| match e {
                ServiceRepositoryError::NotFound => UpdateServiceError::NotFound,
                ServiceRepositoryError::SlugTaken => UpdateServiceError::SlugTaken,
                other => UpdateServiceError::RepositoryError(other.to_string()),
            })
    }
}
