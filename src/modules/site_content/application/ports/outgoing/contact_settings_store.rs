use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactSettingsView {
    pub id: Uuid,
    pub email: String,
    pub phone: String,
    pub whatsapp: Option<String>,
    pub address: String,
    pub map_embed: Option<String>,
    pub office_hours: Option<String>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ContactSettingsData {
    pub email: String,
    pub phone: String,
    pub whatsapp: Option<String>,
    pub address: String,
    pub map_embed: Option<String>,
    pub office_hours: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ContactSettingsStoreError {
    #[error("Contact settings have not been set up yet")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Singleton storage: at most one row exists.
#[async_trait]
pub trait ContactSettingsStore: Send + Sync {
    async fn get(&self) -> Result<ContactSettingsView, ContactSettingsStoreError>;

    /// Replaces the singleton row, creating it on first write.
    async fn upsert(
        &self,
        data: ContactSettingsData,
    ) -> Result<ContactSettingsView, ContactSettingsStoreError>;
}
