use async_trait::async_trait;

use crate::modules::services::application::ports::outgoing::{ServiceQuery, ServiceView};

// ========================= Active Services Use Case =========================

#[derive(Debug, Clone, thiserror::Error)]
pub enum ActiveServicesError {
    #[error("Query error: {0}")]
    QueryError(String),
}

/// Public service catalog: active rows in display order.
#[async_trait]
pub trait IActiveServicesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<ServiceView>, ActiveServicesError>;
}

#[derive(Debug, Clone)]
pub struct ActiveServicesUseCase<Q>
where
    Q: ServiceQuery + Send + Sync,
{
    query: Q,
}

impl<Q> ActiveServicesUseCase<Q>
where
    Q: ServiceQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> IActiveServicesUseCase for ActiveServicesUseCase<Q>
where
    Q: ServiceQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<ServiceView>, ActiveServicesError> {
        self.query
            .active()
            .await
            .map_err(|e| ActiveServicesError::QueryError(e.to_string()))
    }
}
