use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::shared::pagination::{PageRequest, PageResult};

/// Stored contact inquiry as shown to admins.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InquiryView {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewInquiryData {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum InquiryRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait InquiryRepository: Send + Sync {
    async fn insert(&self, data: NewInquiryData) -> Result<InquiryView, InquiryRepositoryError>;

    /// Newest first.
    async fn list(
        &self,
        page: PageRequest,
    ) -> Result<PageResult<InquiryView>, InquiryRepositoryError>;
}
