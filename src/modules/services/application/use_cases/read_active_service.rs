use async_trait::async_trait;
use tracing::warn;

use crate::modules::services::application::ports::outgoing::{
    ServiceQuery, ServiceQueryError, ServiceRepository, ServiceView,
};

// ========================= Read Active Service Use Case =========================

#[derive(Debug, Clone, thiserror::Error)]
pub enum ReadActiveServiceError {
    #[error("Service not found")]
    NotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

/// Public slug read. Bumps the view counter; a failed bump is logged and the
/// read still succeeds.
#[async_trait]
pub trait IReadActiveServiceUseCase: Send + Sync {
    async fn execute(&self, slug: &str) -> Result<ServiceView, ReadActiveServiceError>;
}

#[derive(Debug, Clone)]
pub struct ReadActiveServiceUseCase<Q, R>
where
    Q: ServiceQuery + Send + Sync,
    R: ServiceRepository + Send + Sync,
{
    query: Q,
    repository: R,
}

impl<Q, R> ReadActiveServiceUseCase<Q, R>
where
    Q: ServiceQuery + Send + Sync,
    R: ServiceRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> IReadActiveServiceUseCase for ReadActiveServiceUseCase<Q, R>
where
    Q: ServiceQuery + Send + Sync,
    R: ServiceRepository + Send + Sync,
{
    async fn execute(&self, slug: &str) -> Result<ServiceView, ReadActiveServiceError> {
        let mut view = self
            .query
            .get_active_by_slug(slug)
            .await
            .map_err(|e| match e {
                ServiceQueryError::NotFound => ReadActiveServiceError::NotFound,
                other => ReadActiveServiceError::QueryError(other.to_string()),
            })?;

        match self.repository.increment_views(view.id).await {
            Ok(()) => view.views += 1,
            Err(e) => {
                warn!(service_id = %view.id, error = %e, "failed to bump service view counter")
            }
        }

        Ok(view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::services::application::ports::outgoing::{
        NewServiceData, ServiceListFilter, ServicePatch, ServiceRepositoryError, ServiceSort,
    };
    use crate::modules::services::application::use_cases::create_service::tests::sample_view;
    use crate::shared::pagination::{PageRequest, PageResult};
    use std::sync::Mutex;
    use uuid::Uuid;

    struct MockServiceQuery {
        result: Result<ServiceView, ServiceQueryError>,
    }

    #[async_trait]
    impl ServiceQuery for MockServiceQuery {
        async fn list(
            &self,
            _filter: ServiceListFilter,
            _sort: ServiceSort,
            _page: PageRequest,
        ) -> Result<PageResult<ServiceView>, ServiceQueryError> {
            unimplemented!()
        }

        async fn get_by_id(&self, _id: Uuid) -> Result<ServiceView, ServiceQueryError> {
            unimplemented!()
        }

        async fn get_active_by_slug(&self, _slug: &str) -> Result<ServiceView, ServiceQueryError> {
            self.result.clone()
        }

        async fn active(&self) -> Result<Vec<ServiceView>, ServiceQueryError> {
            unimplemented!()
        }
    }

    struct SpyServiceRepository {
        bump_result: Result<(), ServiceRepositoryError>,
        bumped: Mutex<Vec<Uuid>>,
    }

    #[async_trait]
    impl ServiceRepository for SpyServiceRepository {
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
            unimplemented!()
        }

        async fn increment_views(&self, id: Uuid) -> Result<(), ServiceRepositoryError> {
            self.bumped.lock().unwrap().push(id);
            self.bump_result.clone()
        }
    }

    #[tokio::test]
    async fn read_bumps_the_counter() {
        let view = sample_view("mining-law-advisory", true);
        let use_case = ReadActiveServiceUseCase::new(
            MockServiceQuery {
                result: Ok(view.clone()),
            },
            SpyServiceRepository {
                bump_result: Ok(()),
                bumped: Mutex::new(Vec::new()),
            },
        );

        let found = use_case.execute("mining-law-advisory").await.unwrap();
        assert_eq!(found.views, view.views + 1);
        assert_eq!(*use_case.repository.bumped.lock().unwrap(), vec![view.id]);
    }

    #[tokio::test]
    async fn inactive_slug_is_not_found_and_never_bumped() {
        let use_case = ReadActiveServiceUseCase::new(
            MockServiceQuery {
                result: Err(ServiceQueryError::NotFound),
            },
            SpyServiceRepository {
                bump_result: Ok(()),
                bumped: Mutex::new(Vec::new()),
            },
        );

        let result = use_case.execute("retired-service").await;
        assert!(matches!(result, Err(ReadActiveServiceError::NotFound)));
        assert!(use_case.repository.bumped.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn failed_bump_still_returns_the_row() {
        let view = sample_view("mining-law-advisory", true);
        let use_case = ReadActiveServiceUseCase::new(
            MockServiceQuery {
                result: Ok(view.clone()),
            },
            SpyServiceRepository {
                bump_result: Err(ServiceRepositoryError::DatabaseError("down".to_string())),
                bumped: Mutex::new(Vec::new()),
            },
        );

        let found = use_case.execute("mining-law-advisory").await.unwrap();
        assert_eq!(found.views, view.views);
    }
}
