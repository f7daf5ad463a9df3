use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One headline statistic on the about page, stored as structured JSONB.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ImpactStat {
    pub number: String,
    pub label: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AboutView {
    pub id: Uuid,
    pub intro: String,
    pub who_we_are: String,
    pub vision: String,
    pub mission: String,
    pub company_values: Vec<String>,
    pub impact_stats: Vec<ImpactStat>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct AboutData {
    pub intro: String,
    pub who_we_are: String,
    pub vision: String,
    pub mission: String,
    pub company_values: Vec<String>,
    pub impact_stats: Vec<ImpactStat>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum AboutStoreError {
    #[error("About content has not been set up yet")]
    NotFound,

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Singleton storage: at most one row exists.
#[async_trait]
pub trait AboutStore: Send + Sync {
    async fn get(&self) -> Result<AboutView, AboutStoreError>;

    /// Replaces the singleton row, creating it on first write.
    async fn upsert(&self, data: AboutData) -> Result<AboutView, AboutStoreError>;
}
