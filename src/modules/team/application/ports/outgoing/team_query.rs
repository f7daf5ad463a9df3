use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamMemberView {
    pub id: Uuid,
    pub name: String,
    pub title: String,
    pub bio: String,
    pub image: Option<String>,
    pub specialties: Vec<String>,
    pub experience: Option<String>,
    pub order_index: i32,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct TeamListFilter {
    pub active: Option<bool>,
    pub search: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum TeamSort {
    #[default]
    OrderAsc,
    NameAsc,
    NameDesc,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum TeamQueryError {
    #[error("Team member not found")]
    NotFound,

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait TeamQuery: Send + Sync {
    async fn list(
        &self,
        filter: TeamListFilter,
        sort: TeamSort,
        page: PageRequest,
    ) -> Result<PageResult<TeamMemberView>, TeamQueryError>;

    async fn get_by_id(&self, id: Uuid) -> Result<TeamMemberView, TeamQueryError>;

    /// All active members in display order.
    async fn active(&self) -> Result<Vec<TeamMemberView>, TeamQueryError>;
}
