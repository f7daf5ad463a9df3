use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::services::adapter::outgoing::sea_orm_entity::services::{
    ActiveModel, Column, Entity,
};
use crate::modules::services::adapter::outgoing::service_query_postgres::model_to_view;
use crate::modules::services::application::ports::outgoing::{
    NewServiceData, ServicePatch, ServiceRepository, ServiceRepositoryError, ServiceView,
};

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct ServiceRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ServiceRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ServiceRepository for ServiceRepositoryPostgres {
    async fn create(&self, data: NewServiceData) -> Result<ServiceView, ServiceRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(data.title),
            slug: Set(data.slug),
            description: Set(data.description),
            icon: Set(data.icon),
            link: Set(data.link),
            gradient: Set(data.gradient),
            order_index: Set(data.order_index),
            active: Set(data.active),
            views: Set(0),
            overview: Set(data.overview),
            features: Set(to_json(&data.features)?),
            process_steps: Set(to_json(&data.process_steps)?),
            requirements: Set(to_json(&data.requirements)?),
            benefits: Set(to_json(&data.benefits)?),
            meta_description: Set(data.meta_description),
            keywords: Set(data.keywords),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let row = model.insert(&*self.db).await.map_err(map_slug_error)?;

        model_to_view(row).map_err(|e| ServiceRepositoryError::SerializationError(e.to_string()))
    }

    async fn update(
        &self,
        id: Uuid,
        patch: ServicePatch,
    ) -> Result<ServiceView, ServiceRepositoryError> {
        let mut model = <ActiveModel as Default>::default();

        if let Some(title) = patch.title {
            model.title = Set(title);
        }
        if let Some(slug) = patch.slug {
            model.slug = Set(slug);
        }
        if let Some(description) = patch.description {
            model.description = Set(description);
        }
        if let Some(icon) = patch.icon {
            model.icon = Set(icon);
        }
        if let Some(link) = patch.link {
            model.link = Set(Some(link));
        }
        if let Some(gradient) = patch.gradient {
            model.gradient = Set(Some(gradient));
        }
        if let Some(order_index) = patch.order_index {
            model.order_index = Set(order_index);
        }
        if let Some(active) = patch.active {
            model.active = Set(active);
        }
        if let Some(overview) = patch.overview {
            model.overview = Set(Some(overview));
        }
        if let Some(features) = patch.features {
            model.features = Set(to_json(&features)?);
        }
        if let Some(process_steps) = patch.process_steps {
            model.process_steps = Set(to_json(&process_steps)?);
        }
        if let Some(requirements) = patch.requirements {
            model.requirements = Set(to_json(&requirements)?);
        }
        if let Some(benefits) = patch.benefits {
            model.benefits = Set(to_json(&benefits)?);
        }
        if let Some(meta_description) = patch.meta_description {
            model.meta_description = Set(Some(meta_description));
        }
        if let Some(keywords) = patch.keywords {
            model.keywords = Set(Some(keywords));
        }

        model.updated_at = Set(Utc::now().fixed_offset());

        let rows = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_slug_error)?;

        let row = rows
            .into_iter()
            .next()
            .ok_or(ServiceRepositoryError::NotFound)?;

        model_to_view(row).map_err(|e| ServiceRepositoryError::SerializationError(e.to_string()))
    }

    async fn delete(&self, id: Uuid) -> Result<(), ServiceRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(ServiceRepositoryError::NotFound);
        }

        Ok(())
    }

    async fn increment_views(&self, id: Uuid) -> Result<(), ServiceRepositoryError> {
        let result = Entity::update_many()
            .col_expr(Column::Views, Expr::col(Column::Views).add(1))
            .filter(Column::Id.eq(id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(ServiceRepositoryError::NotFound);
        }

        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn to_json<T: serde::Serialize>(data: &T) -> Result<serde_json::Value, ServiceRepositoryError> {
    serde_json::to_value(data)
        .map_err(|e| ServiceRepositoryError::SerializationError(e.to_string()))
}

fn map_slug_error(e: DbErr) -> ServiceRepositoryError {
    let msg = e.to_string().to_lowercase();

    if (msg.contains("duplicate") || msg.contains("unique") || msg.contains("23505"))
        && msg.contains("slug")
    {
        ServiceRepositoryError::SlugTaken
    } else {
        ServiceRepositoryError::DatabaseError(e.to_string())
    }
}

fn map_db_err(e: DbErr) -> ServiceRepositoryError {
    ServiceRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::services::application::ports::outgoing::ProcessStep;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn new_service_data(slug: &str) -> NewServiceData {
        NewServiceData {
            title: "Mining Law Advisory".to_string(),
            slug: slug.to_string(),
            description: "Concessions and licensing".to_string(),
            icon: "pickaxe".to_string(),
            link: None,
            gradient: None,
            order_index: 1,
            active: true,
            overview: None,
            features: vec!["Licensing".to_string()],
            process_steps: vec![ProcessStep {
                step: 1,
                title: "Intake".to_string(),
                description: "Initial consultation".to_string(),
            }],
            requirements: vec![],
            benefits: vec![],
            meta_description: None,
            keywords: None,
        }
    }

    #[tokio::test]
    async fn create_duplicate_slug_maps_to_slug_taken() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom(
                "duplicate key value violates unique constraint \"services_slug_key\"".to_string(),
            )])
            .into_connection();

        let repo = ServiceRepositoryPostgres::new(Arc::new(db));
        let result = repo.create(new_service_data("taken")).await;

        assert!(matches!(
            result.unwrap_err(),
            ServiceRepositoryError::SlugTaken
        ));
    }

    #[tokio::test]
    async fn delete_missing_row_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = ServiceRepositoryPostgres::new(Arc::new(db));
        let result = repo.delete(Uuid::new_v4()).await;

        assert!(matches!(
            result.unwrap_err(),
            ServiceRepositoryError::NotFound
        ));
    }

    #[tokio::test]
    async fn increment_views_succeeds_for_existing_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let repo = ServiceRepositoryPostgres::new(Arc::new(db));
        assert!(repo.increment_views(Uuid::new_v4()).await.is_ok());
    }
}
