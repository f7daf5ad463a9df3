use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryOrder, QuerySelect,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::inquiry::adapter::outgoing::sea_orm_entity::contact_inquiries::{
    self, Column, Entity,
};
use crate::modules::inquiry::application::ports::outgoing::{
    InquiryRepository, InquiryRepositoryError, InquiryView, NewInquiryData,
};
use crate::shared::pagination::{PageRequest, PageResult};

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct InquiryRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl InquiryRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl InquiryRepository for InquiryRepositoryPostgres {
    async fn insert(&self, data: NewInquiryData) -> Result<InquiryView, InquiryRepositoryError> {
        let model = contact_inquiries::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name),
            email: Set(data.email),
            phone: Set(data.phone),
            subject: Set(data.subject),
            message: Set(data.message),
            ip_address: Set(data.ip_address),
            user_agent: Set(data.user_agent),
            created_at: Set(Utc::now().fixed_offset()),
        };

        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(model_to_view(inserted))
    }

    async fn list(
        &self,
        page: PageRequest,
    ) -> Result<PageResult<InquiryView>, InquiryRepositoryError> {
        let query = Entity::find().order_by_desc(Column::CreatedAt);

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

fn model_to_view(model: contact_inquiries::Model) -> InquiryView {
    InquiryView {
        id: model.id,
        name: model.name,
        email: model.email,
        phone: model.phone,
        subject: model.subject,
        message: model.message,
        ip_address: model.ip_address,
        user_agent: model.user_agent,
        created_at: model.created_at.into(),
    }
}

fn map_db_err(e: DbErr) -> InquiryRepositoryError {
    InquiryRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn mock_inquiry_model(email: &str) -> contact_inquiries::Model {
        contact_inquiries::Model {
            id: Uuid::new_v4(),
            name: "Jane Client".to_string(),
            email: email.to_string(),
            phone: None,
            subject: "Retainer question".to_string(),
            message: "I would like to discuss a retainer.".to_string(),
            ip_address: Some("203.0.113.7".to_string()),
            user_agent: Some("Mozilla/5.0".to_string()),
            created_at: Utc::now().fixed_offset(),
        }
    }

    #[tokio::test]
    async fn insert_returns_stored_view() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![mock_inquiry_model("jane@example.com")]])
            .into_connection();

        let repo = InquiryRepositoryPostgres::new(Arc::new(db));
        let view = repo
            .insert(NewInquiryData {
                name: "Jane Client".to_string(),
                email: "jane@example.com".to_string(),
                phone: None,
                subject: "Retainer question".to_string(),
                message: "I would like to discuss a retainer.".to_string(),
                ip_address: Some("203.0.113.7".to_string()),
                user_agent: Some("Mozilla/5.0".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(view.email, "jane@example.com");
        assert_eq!(view.ip_address.as_deref(), Some("203.0.113.7"));
    }

    #[tokio::test]
    async fn insert_surfaces_db_failure() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom("connection reset".to_string())])
            .into_connection();

        let repo = InquiryRepositoryPostgres::new(Arc::new(db));
        let result = repo
            .insert(NewInquiryData {
                name: "Jane Client".to_string(),
                email: "jane@example.com".to_string(),
                phone: None,
                subject: "Retainer question".to_string(),
                message: "Hello".to_string(),
                ip_address: None,
                user_agent: None,
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            InquiryRepositoryError::DatabaseError(_)
        ));
    }

    // Note: list() uses count() which is difficult to mock with MockDatabase.
    // Use integration tests for full list coverage.
}
