use async_trait::async_trait;
use uuid::Uuid;

use super::service_query::{ProcessStep, ServiceView};

#[derive(Debug, Clone)]
pub struct NewServiceData {
    pub title: String,
    pub slug: String,
    pub description: String,
    pub icon: String,
    pub link: Option<String>,
    pub gradient: Option<String>,
    pub order_index: i32,
    pub active: bool,
    pub overview: Option<String>,
    pub features: Vec<String>,
    pub process_steps: Vec<ProcessStep>,
    pub requirements: Vec<String>,
    pub benefits: Vec<String>,
    pub meta_description: Option<String>,
    pub keywords: Option<String>,
}

/// Partial update: `None` leaves the column untouched.
#[derive(Debug, Clone, Default)]
pub struct ServicePatch {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub link: Option<String>,
    pub gradient: Option<String>,
    pub order_index: Option<i32>,
    pub active: Option<bool>,
    pub overview: Option<String>,
    pub features: Option<Vec<String>>,
    pub process_steps: Option<Vec<ProcessStep>>,
    pub requirements: Option<Vec<String>>,
    pub benefits: Option<Vec<String>>,
    pub meta_description: Option<String>,
    pub keywords: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ServiceRepositoryError {
    #[error("Service not found")]
    NotFound,

    #[error("Slug is already in use")]
    SlugTaken,

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ServiceRepository: Send + Sync {
    async fn create(&self, data: NewServiceData) -> Result<ServiceView, ServiceRepositoryError>;

    async fn update(
        &self,
        id: Uuid,
        patch: ServicePatch,
    ) -> Result<ServiceView, ServiceRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), ServiceRepositoryError>;

    /// Single-statement `views = views + 1`.
    async fn increment_views(&self, id: Uuid) -> Result<(), ServiceRepositoryError>;
}
