use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::blog::application::ports::outgoing::{BlogQuery, BlogQueryError, BlogView};

// ========================= Get Blog Use Case =========================

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetBlogError {
    #[error("Blog post not found")]
    NotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait IGetBlogUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<BlogView, GetBlogError>;
}

#[derive(Debug, Clone)]
pub struct GetBlogUseCase<Q>
where
    Q: BlogQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetBlogUseCase<Q>
where
    Q: BlogQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> IGetBlogUseCase for GetBlogUseCase<Q>
where
    Q: BlogQuery + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<BlogView, GetBlogError> {
        self.query.get_by_id(id).await.map_err(|e| match e {
            BlogQueryError::NotFound => GetBlogError::NotFound,
            other => GetBlogError::QueryError(other.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::blog::application::ports::outgoing::{
        BlogListFilter, BlogSort,
    };
    use crate::modules::blog::application::use_cases::create_blog::tests::sample_view;
    use crate::shared::pagination::{PageRequest, PageResult};

    struct MockBlogQuery {
        result: Result<BlogView, BlogQueryError>,
    }

    #[async_trait]
    impl BlogQuery for MockBlogQuery {
        async fn list(
            &self,
            _filter: BlogListFilter,
            _sort: BlogSort,
            _page: PageRequest,
        ) -> Result<PageResult<BlogView>, BlogQueryError> {
            unimplemented!()
        }

        async fn get_by_id(&self, _id: Uuid) -> Result<BlogView, BlogQueryError> {
            self.result.clone()
        }

        async fn get_published_by_slug(&self, _slug: &str) -> Result<BlogView, BlogQueryError> {
            unimplemented!()
        }

        async fn featured(&self, _limit: u64) -> Result<Vec<BlogView>, BlogQueryError> {
            unimplemented!()
        }
    }

    #[tokio::test]
    async fn returns_the_row_when_found() {
        let view = sample_view("a-post", false);
        let use_case = GetBlogUseCase::new(MockBlogQuery {
            result: Ok(view.clone()),
        });

        let found = use_case.execute(view.id).await.unwrap();
        assert_eq!(found.id, view.id);
    }

    #[tokio::test]
    async fn missing_row_maps_to_not_found() {
        let use_case = GetBlogUseCase::new(MockBlogQuery {
            result: Err(BlogQueryError::NotFound),
        });

        let result = use_case.execute(Uuid::new_v4()).await;
        assert!(matches!(result, Err(GetBlogError::NotFound)));
    }
}
