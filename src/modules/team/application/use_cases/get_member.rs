use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::team::application::ports::outgoing::{
    TeamMemberView, TeamQuery, TeamQueryError,
};

// ========================= Get Member Use Case =========================

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetMemberError {
    #[error("Team member not found")]
    NotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait IGetMemberUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<TeamMemberView, GetMemberError>;
}

#[derive(Debug, Clone)]
pub struct GetMemberUseCase<Q>
where
    Q: TeamQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetMemberUseCase<Q>
where
    Q: TeamQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> IGetMemberUseCase for GetMemberUseCase<Q>
where
    Q: TeamQuery + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<TeamMemberView, GetMemberError> {
        self.query.get_by_id(id).await.map_err(|e| match e {
            TeamQueryError::NotFound => GetMemberError::NotFound,
            other => GetMemberError::QueryError(other.to_string()),
        })
    }
}
