use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::site_content::adapter::outgoing::sea_orm_entity::about_content::{
    self, ActiveModel, Entity,
};
use crate::modules::site_content::application::ports::outgoing::{
    AboutData, AboutStore, AboutStoreError, AboutView,
};

// ============================================================================
// Store Implementation
// ============================================================================

#[derive(Clone)]
pub struct AboutStorePostgres {
    db: Arc<DatabaseConnection>,
}

impl AboutStorePostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AboutStore for AboutStorePostgres {
    async fn get(&self) -> Result<AboutView, AboutStoreError> {
        let row = Entity::find()
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(AboutStoreError::NotFound)?;

        model_to_view(row)
    }

    async fn upsert(&self, data: AboutData) -> Result<AboutView, AboutStoreError> {
        let now = Utc::now().fixed_offset();
        let existing = Entity::find().one(&*self.db).await.map_err(map_db_err)?;

        let mut model = ActiveModel {
            intro: Set(data.intro),
            who_we_are: Set(data.who_we_are),
            vision: Set(data.vision),
            mission: Set(data.mission),
            company_values: Set(to_json(&data.company_values)?),
            impact_stats: Set(to_json(&data.impact_stats)?),
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

        model_to_view(row)
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn model_to_view(model: about_content::Model) -> Result<AboutView, AboutStoreError> {
    Ok(AboutView {
        id: model.id,
        intro: model.intro,
        who_we_are: model.who_we_are,
        vision: model.vision,
        mission: model.mission,
        company_values: from_json(&model.company_values)?,
        impact_stats: from_json(&model.impact_stats)?,
        updated_at: model.updated_at.into(),
    })
}

fn to_json<T: serde::Serialize>(data: &T) -> Result<serde_json::Value, AboutStoreError> {
    serde_json::to_value(data).map_err(|e| AboutStoreError::SerializationError(e.to_string()))
}

fn from_json<T: serde::de::DeserializeOwned>(
    json: &serde_json::Value,
) -> Result<T, AboutStoreError> {
    serde_json::from_value(json.clone())
        .map_err(|e| AboutStoreError::SerializationError(e.to_string()))
}

fn map_db_err(e: DbErr) -> AboutStoreError {
    AboutStoreError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
