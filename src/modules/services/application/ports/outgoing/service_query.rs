use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::pagination::{PageRequest, PageResult};

/// One step of a service's engagement process, stored as structured JSONB.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ProcessStep {
    pub step: i32,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceView {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub icon: String,
    pub link: Option<String>,
    pub gradient: Option<String>,
    pub order_index: i32,
    pub active: bool,
    pub views: i64,
    pub overview: Option<String>,
    pub features: Vec<String>,
    pub process_steps: Vec<ProcessStep>,
    pub requirements: Vec<String>,
    pub benefits: Vec<String>,
    pub meta_description: Option<String>,
    pub keywords: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct ServiceListFilter {
    pub active: Option<bool>,
    pub search: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ServiceSort {
    #[default]
    OrderAsc,
    TitleAsc,
    TitleDesc,
    ViewsDesc,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ServiceQueryError {
    #[error("Service not found")]
    NotFound,

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ServiceQuery: Send + Sync {
    async fn list(
        &self,
        filter: ServiceListFilter,
        sort: ServiceSort,
        page: PageRequest,
    ) -> Result<PageResult<ServiceView>, ServiceQueryError>;

    async fn get_by_id(&self, id: Uuid) -> Result<ServiceView, ServiceQueryError>;

    /// Public lookup: inactive rows read as absent.
    async fn get_active_by_slug(&self, slug: &str) -> Result<ServiceView, ServiceQueryError>;

    /// All active services in display order.
    async fn active(&self) -> Result<Vec<ServiceView>, ServiceQueryError>;
}
