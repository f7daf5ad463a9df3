use async_trait::async_trait;
use tracing::warn;

use crate::modules::blog::application::ports::outgoing::{
    BlogQuery, BlogQueryError, BlogRepository, BlogView,
};

// ========================= Read Published Blog Use Case =========================

#[derive(Debug, Clone, thiserror::Error)]
pub enum ReadPublishedBlogError {
    #[error("Blog post not found")]
    NotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

/// Public slug read. Bumps the view counter as a side effect; a failed bump
/// is logged but never turns a successful read into an error.
#[async_trait]
pub trait IReadPublishedBlogUseCase: Send + Sync {
    async fn execute(&self, slug: &str) -> Result<BlogView, ReadPublishedBlogError>;
}

#[derive(Debug, Clone)]
pub struct ReadPublishedBlogUseCase<Q, R>
where
    Q: BlogQuery + Send + Sync,
    R: BlogRepository + Send + Sync,
{
    query: Q,
    repository: R,
}

impl<Q, R> ReadPublishedBlogUseCase<Q, R>
where
    Q: BlogQuery + Send + Sync,
    R: BlogRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> IReadPublishedBlogUseCase for ReadPublishedBlogUseCase<Q, R>
where
    Q: BlogQuery + Send + Sync,
    R: BlogRepository + Send + Sync,
{
    async fn execute(&self, slug: &str) -> Result<BlogView, ReadPublishedBlogError> {
        let mut view = self
            .query
            .get_published_by_slug(slug)
            .await
            .map_err(|e| match e {
                BlogQueryError::NotFound => ReadPublishedBlogError::NotFound,
                other => ReadPublishedBlogError::QueryError(other.to_string()),
            })?;

        match self.repository.increment_views(view.id).await {
            Ok(()) => view.views += 1,
            Err(e) => warn!(blog_id = %view.id, error = %e, "failed to bump blog view counter"),
        }

        Ok(view)
    }
}
