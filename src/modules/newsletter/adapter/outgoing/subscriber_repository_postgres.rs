use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::newsletter::adapter::outgoing::sea_orm_entity::subscribers::{
    self, Column, Entity,
};
use crate::modules::newsletter::application::ports::outgoing::{
    SubscriberRepository, SubscriberRepositoryError, SubscriberView,
};
use crate::shared::pagination::{PageRequest, PageResult};

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct SubscriberRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SubscriberRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SubscriberRepository for SubscriberRepositoryPostgres {
    async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<SubscriberView>, SubscriberRepositoryError> {
        let row = Entity::find()
            .filter(Column::Email.eq(email.trim().to_lowercase()))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(row.map(model_to_view))
    }

    async fn insert(&self, email: &str) -> Result<SubscriberView, SubscriberRepositoryError> {
        let model = subscribers::ActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set(email.to_string()),
            active: Set(true),
            subscribed_at: Set(Utc::now().fixed_offset()),
            unsubscribed_at: Set(None),
        };

        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(model_to_view(inserted))
    }

    async fn reactivate(&self, id: Uuid) -> Result<SubscriberView, SubscriberRepositoryError> {
        let model = subscribers::ActiveModel {
            id: Set(id),
            active: Set(true),
            subscribed_at: Set(Utc::now().fixed_offset()),
            unsubscribed_at: Set(None),
            ..Default::default()
        };

        let updated = model.update(&*self.db).await.map_err(map_update_err)?;
        Ok(model_to_view(updated))
    }

    async fn deactivate(&self, id: Uuid) -> Result<SubscriberView, SubscriberRepositoryError> {
        let model = subscribers::ActiveModel {
            id: Set(id),
            active: Set(false),
            unsubscribed_at: Set(Some(Utc::now().fixed_offset())),
            ..Default::default()
        };

        let updated = model.update(&*self.db).await.map_err(map_update_err)?;
        Ok(model_to_view(updated))
    }

    async fn list(
        &self,
        page: PageRequest,
    ) -> Result<PageResult<SubscriberView>, SubscriberRepositoryError> {
        let query = Entity::find().order_by_desc(Column::SubscribedAt);

        let total = query.clone().count(&*self.db).await.map_err(map_db_err)?;

        let rows = query
            .offset(page.offset())
            .limit(page.per_page())
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(PageResult {
            items: rows.into_iter().map(model_to_view).collect(),
            total,
            page: page.page(),
            per_page: page.per_page(),
        })
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn model_to_view(model: subscribers::Model) -> SubscriberView {
    SubscriberView {
        id: model.id,
        email: model.email,
        active: model.active,
        subscribed_at: model.subscribed_at.into(),
        unsubscribed_at: model.unsubscribed_at.map(Into::into),
    }
}

fn map_db_err(e: DbErr) -> SubscriberRepositoryError {
    SubscriberRepositoryError::DatabaseError(e.to_string())
}

fn map_update_err(e: DbErr) -> SubscriberRepositoryError {
    match e {
        DbErr::RecordNotUpdated => SubscriberRepositoryError::NotFound,
        other => SubscriberRepositoryError::DatabaseError(other.to_string()),
    }
}

// ============================================================================
// Tests
// ============================================================================
