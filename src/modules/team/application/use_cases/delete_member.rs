use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::team::application::ports::outgoing::{TeamRepository, TeamRepositoryError};

// ========================= Delete Member Use Case =========================

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteMemberError {
    #[error("Team member not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IDeleteMemberUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), DeleteMemberError>;
}

#[derive(Debug, Clone)]
pub struct DeleteMemberUseCase<R>
where
    R: TeamRepository + Send + Sync,
{
    repository: R,
}

impl<R> DeleteMemberUseCase<R>
where
    R: TeamRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IDeleteMemberUseCase for DeleteMemberUseCase<R>
where
    R: TeamRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<(), DeleteMemberError> {
        self.repository.delete(id).await.map_err(|e| match e {
            TeamRepositoryError::NotFound => DeleteMemberError::NotFound,
            other => DeleteMemberError::RepositoryError(other.to_string()),
        })
    }
}
