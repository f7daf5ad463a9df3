use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::blog::application::ports::outgoing::{BlogRepository, BlogRepositoryError};

// ========================= Delete Blog Use Case =========================

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteBlogError {
    #[error("Blog post not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IDeleteBlogUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), DeleteBlogError>;
}

#[derive(Debug, Clone)]
pub struct DeleteBlogUseCase<R>
where
    R: BlogRepository + Send + Sync,
{
    repository: R,
}

impl<R> DeleteBlogUseCase<R>
where
    R: BlogRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IDeleteBlogUseCase for DeleteBlogUseCase<R>
where
    R: BlogRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<(), DeleteBlogError> {
        self.repository.delete(id).await.map_err(|e| match e {
            BlogRepositoryError::NotFound => DeleteBlogError::NotFound,
            other => DeleteBlogError::RepositoryError(other.to_string()),
        })
    }
}
