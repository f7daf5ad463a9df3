use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::site_content::adapter::outgoing::sea_orm_entity::contact_settings::{
    self, ActiveModel, Entity,
};
use crate::modules::site_content::application::ports::outgoing::{
    ContactSettingsData, ContactSettingsStore, ContactSettingsStoreError, ContactSettingsView,
};

// ============================================================================
// Store Implementation
// ============================================================================

#[derive(Clone)]
pub struct ContactSettingsStorePostgres {
    db: Arc<DatabaseConnection>,
}

impl ContactSettingsStorePostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContactSettingsStore for ContactSettingsStorePostgres {
    async fn get(&self) -> Result<ContactSettingsView, ContactSettingsStoreError> {
        let row = Entity::find()
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(ContactSettingsStoreError::NotFound)?;

        Ok(model_to_view(row))
    }

    async fn upsert(
        &self,
        data: ContactSettingsData,
    ) -> Result<ContactSettingsView, ContactSettingsStoreError> {
        let now = Utc::now().fixed_offset();
        let existing = Entity::find().one(&*self.db).await.map_err(map_db_err)?;

        let mut model = ActiveModel {
            email: Set(data.email),
            phone: Set(data.phone),
            whatsapp: Set(data.whatsapp),
            address: Set(data.address),
            map_embed: Set(data.map_embed),
            office_hours: Set(data.office_hours),
            updated_at: Set(now),
            ..Default::default()
        };

        let row = match existing {
            Some(current) => {
                model.id = Set(current.id);
                model.update(&*self.db).await.map_err(map_db_err)?
            }
            None => {
                model.id = Set(Uuid::new_v4());
                model.insert(&*self.db).await.map_err(map_db_err)?
            }
        };

        Ok(model_to_view(row))
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn model_to_view(model: contact_settings::Model) -> ContactSettingsView {
    ContactSettingsView {
        id: model.id,
        email: model.email,
        phone: model.phone,
        whatsapp: model.whatsapp,
        address: model.address,
        map_embed: model.map_embed,
        office_hours: model.office_hours,
        updated_at: model.updated_at.into(),
    }
}

fn map_db_err(e: DbErr) -> ContactSettingsStoreError {
    ContactSettingsStoreError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
