use async_trait::async_trait;

use crate::modules::site_content::application::ports::outgoing::{
    AboutData, AboutStore, AboutStoreError, AboutView, ImpactStat,
};
use crate::shared::validation::{required_text, Violations};

// ========================= Put About Command =========================

#[derive(Debug, Clone)]
pub struct PutAboutCommand {
    data: AboutData,
}

impl PutAboutCommand {
    pub fn new(
        intro: Option<String>,
        who_we_are: Option<String>,
        vision: Option<String>,
        mission: Option<String>,
        company_values: Option<Vec<String>>,
        impact_stats: Option<Vec<ImpactStat>>,
    ) -> Result<Self, Violations> {
        let mut v = Violations::new();

        let intro = required_text(&mut v, "intro", intro, 5000);
        let who_we_are = required_text(&mut v, "who_we_are", who_we_are, 10_000);
        let vision = required_text(&mut v, "vision", vision, 5000);
        let mission = required_text(&mut v, "mission", mission, 5000);

        let company_values = company_values.unwrap_or_default();
        if company_values.iter().any(|c| c.trim().is_empty()) {
            v.add("company_values", "company_values must not contain empty entries");
        }

        let impact_stats = impact_stats.unwrap_or_default();
        for stat in &impact_stats {
            if stat.number.trim().is_empty() || stat.label.trim().is_empty() {
                v.add("impact_stats", "impact_stats entries need a number and a label");
                break;
            }
        }

        if !v.is_empty() {
            return Err(v);
        }

        Ok(Self {
            data: AboutData {
                intro,
                who_we_are,
                vision,
                mission,
                company_values,
                impact_stats,
            },
        })
    }

    pub fn data(&self) -> &AboutData {
        &self.data
    }
}

// ========================= About Use Cases =========================

#[derive(Debug, Clone, thiserror::Error)]
pub enum AboutError {
    #[error("About content has not been set up yet")]
    NotFound,

    #[error("Store error: {0}")]
    StoreError(String),
}

#[async_trait]
pub trait IGetAboutUseCase: Send + Sync {
    async fn execute(&self) -> Result<AboutView, AboutError>;
}

#[async_trait]
pub trait IPutAboutUseCase: Send + Sync {
    async fn execute(&self, command: PutAboutCommand) -> Result<AboutView, AboutError>;
}

#[derive(Debug, Clone)]
pub struct GetAboutUseCase<S>
where
    S: AboutStore + Send + Sync,
{
    store: S,
}

impl<S> GetAboutUseCase<S>
where
    S: AboutStore + Send + Sync,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S> IGetAboutUseCase for GetAboutUseCase<S>
where
    S: AboutStore + Send + Sync,
{
    async fn execute(&self) -> Result<AboutView, AboutError> {
        self.store.get().await.map_err(|e| match e {
            AboutStoreError::NotFound => AboutError::NotFound,
            other => AboutError::StoreError(other.to_string()),
        })
    }
}

#[derive(Debug, Clone)]
pub struct PutAboutUseCase<S>
where
    S: AboutStore + Send + Sync,
{
    store: S,
}

impl<S> PutAboutUseCase<S>
where
    S: AboutStore + Send + Sync,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S> IPutAboutUseCase for PutAboutUseCase<S>
where
    S: AboutStore + Send + Sync,
{
    async fn execute(&self, command: PutAboutCommand) -> Result<AboutView, AboutError> {
        self.store
            .upsert(command.data().clone())
            .await
            .map_err(|e| AboutError::StoreError(e.to_string()))
    }
}
