use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::services::application::ports::outgoing::{
    ServiceRepository, ServiceRepositoryError,
};

// ========================= Delete Service Use Case =========================

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteServiceError {
    #[error("Service not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IDeleteServiceUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), DeleteServiceError>;
}

#[derive(Debug, Clone)]
pub struct DeleteServiceUseCase<R>
where
    R: ServiceRepository + Send + Sync,
{
    repository: R,
}

impl<R> DeleteServiceUseCase<R>
where
    R: ServiceRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IDeleteServiceUseCase for DeleteServiceUseCase<R>
where
    R: ServiceRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<(), DeleteServiceError> {
        self.repository.delete(id).await.map_err(|e| match e {
            ServiceRepositoryError::NotFound => DeleteServiceError::NotFound,
            other => DeleteServiceError::RepositoryError(other.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::services::application::ports::outgoing::{
        NewServiceData, ServicePatch, ServiceView,
    };

    struct MockServiceRepository {
        result: Result<(), ServiceRepositoryError>,
    }

    #[async_trait]
    impl ServiceRepository for MockServiceRepository {
        async fn create(&self, _data: NewServiceData) -> Result<ServiceView, ServiceRepositoryError> {
            unimplemented!()
        }

        async fn update(
            &self,
            _id: Uuid,
            _patch: ServicePatch,
        ) -> Result<ServiceView, ServiceRepositoryError> {
            unimplemented!()
        }

        async fn delete(&self, _id: Uuid) -> Result<(), ServiceRepositoryError> {
            self.result.clone()
        }

        async fn increment_views(&self, _id: Uuid) -> Result<(), ServiceRepositoryError> {
            unimplemented!()
        }
    }

    #[tokio::test]
    async fn delete_of_missing_row_maps_to_not_found() {
        let use_case = DeleteServiceUseCase::new(MockServiceRepository {
            result: Err(ServiceRepositoryError::NotFound),
        });

        let result = use_case.execute(Uuid::new_v4()).await;
        assert!(matches!(result, Err(DeleteServiceError::NotFound)));
    }

    #[tokio::test]
    async fn delete_succeeds_for_existing_row() {
        let use_case = DeleteServiceUseCase::new(MockServiceRepository { result: Ok(()) });
        assert!(use_case.execute(Uuid::new_v4()).await.is_ok());
    }
}
