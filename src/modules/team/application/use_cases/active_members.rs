use async_trait::async_trait;

use crate::modules::team::application::ports::outgoing::{TeamMemberView, TeamQuery};

// ========================= Active Members Use Case =========================

#[derive(Debug, Clone, thiserror::Error)]
pub enum ActiveMembersError {
    #[error("Query error: {0}")]
    QueryError(String),
}

/// Public team roster: active members in display order.
#[async_trait]
pub trait IActiveMembersUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<TeamMemberView>, ActiveMembersError>;
}

#[derive(Debug, Clone)]
pub struct ActiveMembersUseCase<Q>
where
    Q: TeamQuery + Send + Sync,
{
    query: Q,
}

impl<Q> ActiveMembersUseCase<Q>
where
    Q: TeamQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> IActiveMembersUseCase for ActiveMembersUseCase<Q>
where
    Q: TeamQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<TeamMemberView>, ActiveMembersError> {
        self.query
            .active()
            .await
            .map_err(|e| ActiveMembersError::QueryError(e.to_string()))
    }
}
