use async_trait::async_trait;

use crate::modules::newsletter::application::ports::outgoing::{
    SubscriberRepository, SubscriberView,
};
use crate::shared::pagination::{PageRequest, PageResult};

// ========================= List Subscribers Use Case =========================

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListSubscribersError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait IListSubscribersUseCase: Send + Sync {
    async fn execute(
        &self,
        page: PageRequest,
    ) -> Result<PageResult<SubscriberView>, ListSubscribersError>;
}

#[derive(Debug, Clone)]
pub struct ListSubscribersUseCase<R>
where
    R: SubscriberRepository + Send + Sync,
{
    repository: R,
}

impl<R> ListSubscribersUseCase<R>
where
    R: SubscriberRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IListSubscribersUseCase for ListSubscribersUseCase<R>
where
    R: SubscriberRepository + Send + Sync,
{
    async fn execute(
        &self,
        page: PageRequest,
    ) -> Result<PageResult<SubscriberView>, ListSubscribersError> {
        self.repository
            .list(page)
            .await
            .map_err(|e| ListSubscribersError::QueryError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::newsletter::application::ports::outgoing::SubscriberRepositoryError;
    use crate::modules::newsletter::application::use_cases::subscribe::tests::sample_subscriber;
    use uuid::Uuid;

    struct PagedRepository {
        rows: Vec<SubscriberView>,
    }

    #[async_trait]
    impl SubscriberRepository for PagedRepository {
        async fn find_by_email(
            &self,
            _email: &str,
        ) -> Result<Option<SubscriberView>, SubscriberRepositoryError> {
            unimplemented!()
        }

        async fn insert(
            &self,
            _email: &str,
        ) -> Result<SubscriberView, SubscriberRepositoryError> {
            unimplemented!()
        }

        async fn reactivate(
            &self,
            _id: Uuid,
        ) -> Result<SubscriberView, SubscriberRepositoryError> {
            unimplemented!()
        }

        async fn deactivate(
            &self,
            _id: Uuid,
        ) -> Result<SubscriberView, SubscriberRepositoryError> {
            unimplemented!()
        }

        async fn list(
            &self,
            page: PageRequest,
        ) -> Result<PageResult<SubscriberView>, SubscriberRepositoryError> {
            Ok(PageResult {
                total: self.rows.len() as u64,
                items: self.rows.clone(),
                page: page.page(),
                per_page: page.per_page(),
            })
        }
    }

    #[tokio::test]
    async fn returns_page_of_subscribers() {
        let use_case = ListSubscribersUseCase::new(PagedRepository {
            rows: vec![
                sample_subscriber("a@example.com", true),
                sample_subscriber("b@example.com", false),
            ],
        });

        let result = use_case.execute(PageRequest::new(1, 10)).await.unwrap();
        assert_eq!(result.total, 2);
    }
}
