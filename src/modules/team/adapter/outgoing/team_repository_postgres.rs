use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::team::adapter::outgoing::sea_orm_entity::team_members::{
    ActiveModel, Column, Entity,
};
use crate::modules::team::adapter::outgoing::team_query_postgres::model_to_view;
use crate::modules::team::application::ports::outgoing::{
    NewTeamMemberData, TeamMemberPatch, TeamMemberView, TeamRepository, TeamRepositoryError,
};

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct TeamRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TeamRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TeamRepository for TeamRepositoryPostgres {
    async fn create(
        &self,
        data: NewTeamMemberData,
    ) -> Result<TeamMemberView, TeamRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name),
            title: Set(data.title),
            bio: Set(data.bio),
            image: Set(data.image),
            specialties: Set(to_json(&data.specialties)?),
            experience: Set(data.experience),
            order_index: Set(data.order_index),
            active: Set(data.active),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let row = model.insert(&*self.db).await.map_err(map_db_err)?;

        model_to_view(row).map_err(|e| TeamRepositoryError::SerializationError(e.to_string()))
    }

    async fn update(
        &self,
        id: Uuid,
        patch: TeamMemberPatch,
    ) -> Result<TeamMemberView, TeamRepositoryError> {
        let mut model = <ActiveModel as Default>::default();

        if let Some(name) = patch.name {
            model.name = Set(name);
        }
        if let Some(title) = patch.title {
            model.title = Set(title);
        }
        if let Some(bio) = patch.bio {
            model.bio = Set(bio);
        }
        if let Some(image) = patch.image {
            model.image = Set(Some(image));
        }
        if let Some(specialties) = patch.specialties {
            model.specialties = Set(to_json(&specialties)?);
        }
        if let Some(experience) = patch.experience {
            model.experience = Set(Some(experience));
        }
        if let Some(order_index) = patch.order_index {
            model.order_index = Set(order_index);
        }
        if let Some(active) = patch.active {
            model.active = Set(active);
        }

        model.updated_at = Set(Utc::now().fixed_offset());

        let rows = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        let row = rows
            .into_iter()
            .next()
            .ok_or(TeamRepositoryError::NotFound)?;

        model_to_view(row).map_err(|e| TeamRepositoryError::SerializationError(e.to_string()))
    }

    async fn delete(&self, id: Uuid) -> Result<(), TeamRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(TeamRepositoryError::NotFound);
        }

        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn to_json<T: serde::Serialize>(data: &T) -> Result<serde_json::Value, TeamRepositoryError> {
    serde_json::to_value(data).map_err(|e| TeamRepositoryError::SerializationError(e.to_string()))
}

fn map_db_err(e: DbErr) -> TeamRepositoryError {
    TeamRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    #[tokio::test]
    async fn delete_missing_row_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = TeamRepositoryPostgres::new(Arc::new(db));
        let result = repo.delete(Uuid::new_v4()).await;

        assert!(matches!(result.unwrap_err(), TeamRepositoryError::NotFound));
    }

    #[tokio::test]
    async fn delete_existing_row_succeeds() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let repo = TeamRepositoryPostgres::new(Arc::new(db));
        assert!(repo.delete(Uuid::new_v4()).await.is_ok());
    }
}
