use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::shared::pagination::{PageRequest, PageResult};

/// Newsletter subscriber row. An unsubscribed address keeps its row with
/// `active = false` so a later subscribe reactivates it instead of
/// inserting a duplicate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubscriberView {
    pub id: Uuid,
    pub email: String,
    pub active: bool,
    pub subscribed_at: DateTime<Utc>,
    pub unsubscribed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SubscriberRepositoryError {
    #[error("Subscriber not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait SubscriberRepository: Send + Sync {
    async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<SubscriberView>, SubscriberRepositoryError>;

    async fn insert(&self, email: &str) -> Result<SubscriberView, SubscriberRepositoryError>;

    /// Sets `active = true` and clears `unsubscribed_at`, bumping
    /// `subscribed_at` to now.
    async fn reactivate(&self, id: Uuid) -> Result<SubscriberView, SubscriberRepositoryError>;

    /// Sets `active = false` and stamps `unsubscribed_at`.
    async fn deactivate(&self, id: Uuid) -> Result<SubscriberView, SubscriberRepositoryError>;

    /// Newest first.
    async fn list(
        &self,
        page: PageRequest,
    ) -> Result<PageResult<SubscriberView>, SubscriberRepositoryError>;
}
