use async_trait::async_trait;

use crate::modules::site_content::application::ports::outgoing::{
    ContactSettingsData, ContactSettingsStore, ContactSettingsStoreError, ContactSettingsView,
};
use crate::shared::validation::{optional_text, required_email, required_text, Violations};

// ========================= Put Contact Settings Command =========================

#[derive(Debug, Clone)]
pub struct PutContactSettingsCommand {
    data: ContactSettingsData,
}

impl PutContactSettingsCommand {
    pub fn new(
        email: Option<String>,
        phone: Option<String>,
        whatsapp: Option<String>,
        address: Option<String>,
        map_embed: Option<String>,
        office_hours: Option<String>,
    ) -> Result<Self, Violations> {
        let mut v = Violations::new();

        let email = required_email(&mut v, "email", email);
        let phone = required_text(&mut v, "phone", phone, 50);
        let whatsapp = optional_text(&mut v, "whatsapp", whatsapp, 50);
        let address = required_text(&mut v, "address", address, 500);
        let map_embed = optional_text(&mut v, "map_embed", map_embed, 5000);
        let office_hours = optional_text(&mut v, "office_hours", office_hours, 255);

        if !v.is_empty() {
            return Err(v);
        }

        Ok(Self {
            data: ContactSettingsData {
                email,
                phone,
                whatsapp,
                address,
                map_embed,
                office_hours,
            },
        })
    }

    pub fn data(&self) -> &ContactSettingsData {
        &self.data
    }
}

// ========================= Contact Settings Use Cases =========================

#[derive(Debug, Clone, thiserror::Error)]
pub enum ContactSettingsError {
    #[error("Contact settings have not been set up yet")]
    NotFound,

    #[error("Store error: {0}")]
    StoreError(String),
}

#[async_trait]
pub trait IGetContactSettingsUseCase: Send + Sync {
    async fn execute(&self) -> Result<ContactSettingsView, ContactSettingsError>;
}

#[async_trait]
pub trait IPutContactSettingsUseCase: Send + Sync {
    async fn execute(
        &self,
        command: PutContactSettingsCommand,
    ) -> Result<ContactSettingsView, ContactSettingsError>;
}

#[derive(Debug, Clone)]
pub struct GetContactSettingsUseCase<S>
where
    S: ContactSettingsStore + Send + Sync,
{
    store: S,
}

impl<S> GetContactSettingsUseCase<S>
where
    S: ContactSettingsStore + Send + Sync,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S> IGetContactSettingsUseCase for GetContactSettingsUseCase<S>
where
    S: ContactSettingsStore + Send + Sync,
{
    async fn execute(&self) -> Result<ContactSettingsView, ContactSettingsError> {
        self.store.get().await.map_err(|e| match e {
            ContactSettingsStoreError::NotFound => ContactSettingsError::NotFound,
            other => ContactSettingsError::StoreError(other.to_string()),
        })
    }
}

#[derive(Debug, Clone)]
pub struct PutContactSettingsUseCase<S>
where
    S: ContactSettingsStore + Send + Sync,
{
    store: S,
}

impl<S> PutContactSettingsUseCase<S>
where
    S: ContactSettingsStore + Send + Sync,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S> IPutContactSettingsUseCase for PutContactSettingsUseCase<S>
where
    S: ContactSettingsStore + Send + Sync,
{
    async fn execute(
        &self,
        command: PutContactSettingsCommand,
    ) -> Result<ContactSettingsView, ContactSettingsError> {
        self.store
            .upsert(command.data().clone())
            .await
            .map_err(|e| ContactSettingsError::StoreError(e.to_string()))
    }
}
