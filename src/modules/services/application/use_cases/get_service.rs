use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::services::application::ports::outgoing::{
    ServiceQuery, ServiceQueryError, ServiceView,
};

// ========================= Get Service Use Case =========================

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetServiceError {
    #[error("Service not found")]
    NotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait IGetServiceUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<ServiceView, GetServiceError>;
}

#[derive(Debug, Clone)]
pub struct GetServiceUseCase<Q>
where
    Q: ServiceQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetServiceUseCase<Q>
where
    Q: ServiceQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> IGetServiceUseCase for GetServiceUseCase<Q>
where
    Q: ServiceQuery + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<ServiceView, GetServiceError> {
        self.query.get_by_id(id).await.map_err(|e| match e {
            ServiceQueryError::NotFound => GetServiceError::NotFound,
            other => GetServiceError::QueryError(other.to_string()),
        })
    }
}
