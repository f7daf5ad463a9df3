use async_trait::async_trait;

use crate::modules::services::application::ports::outgoing::{
    ServiceListFilter, ServiceQuery, ServiceSort, ServiceView,
};
use crate::shared::pagination::{PageRequest, PageResult};

// ========================= List Services Use Case =========================

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListServicesError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait IListServicesUseCase: Send + Sync {
    async fn execute(
        &self,
        filter: ServiceListFilter,
        sort: ServiceSort,
        page: PageRequest,
    ) -> Result<PageResult<ServiceView>, ListServicesError>;
}

#[derive(Debug, Clone)]
pub struct ListServicesUseCase<Q>
where
    Q: ServiceQuery + Send + Sync,
{
    query: Q,
}

impl<Q> ListServicesUseCase<Q>
where
    Q: ServiceQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> IListServicesUseCase for ListServicesUseCase<Q>
where
    Q: ServiceQuery + Send + Sync,
{
    async fn execute(
        &self,
        filter: ServiceListFilter,
        sort: ServiceSort,
        page: PageRequest,
    ) -> Result<PageResult<ServiceView>, ListServicesError> {
        self.query
            .list(filter, sort, page)
            .await
            .map_err(|e| ListServicesError::QueryError(e.to_string()))
    }
}
