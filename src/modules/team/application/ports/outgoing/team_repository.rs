use async_trait::async_trait;
use uuid::Uuid;

use super::team_query::TeamMemberView;

#[derive(Debug, Clone)]
pub struct NewTeamMemberData {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub image: Option<String>,
    pub specialties: Vec<String>,
    pub experience: Option<String>,
    pub order_index: i32,
    pub active: bool,
}

/// Partial update: `None` leaves the column untouched.
#[derive(Debug, Clone, Default)]
pub struct TeamMemberPatch {
    pub name: Option<String>,
    pub title: Option<String>,
    pub bio: Option<String>,
    pub image: Option<String>,
    pub specialties: Option<Vec<String>>,
    pub experience: Option<String>,
    pub order_index: Option<i32>,
    pub active: Option<bool>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum TeamRepositoryError {
    #[error("Team member not found")]
    NotFound,

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait TeamRepository: Send + Sync {
    async fn create(&self, data: NewTeamMemberData)
        -> Result<TeamMemberView, TeamRepositoryError>;

    async fn update(
        &self,
        id: Uuid,
        patch: TeamMemberPatch,
    ) -> Result<TeamMemberView, TeamRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), TeamRepositoryError>;
}
