use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::blog::adapter::outgoing::blog_query_postgres::model_to_view;
use crate::modules::blog::adapter::outgoing::sea_orm_entity::blogs::{ActiveModel, Column, Entity};
use crate::modules::blog::application::ports::outgoing::{
    BlogPatch, BlogRepository, BlogRepositoryError, BlogView, NewBlogData,
};

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct BlogRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl BlogRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BlogRepository for BlogRepositoryPostgres {
    async fn create(&self, data: NewBlogData) -> Result<BlogView, BlogRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(data.title),
            slug: Set(data.slug),
            content: Set(data.content),
            excerpt: Set(data.excerpt),
            date: Set(data.date),
            author: Set(data.author),
            read_time: Set(data.read_time),
            category: Set(data.category),
            views: Set(0),
            published: Set(data.published),
            featured: Set(data.featured),
            meta_description: Set(data.meta_description),
            keywords: Set(data.keywords),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let row = model.insert(&*self.db).await.map_err(map_slug_error)?;

        Ok(model_to_view(row))
    }

    async fn update(&self, id: Uuid, patch: BlogPatch) -> Result<BlogView, BlogRepositoryError> {
        let mut model = <ActiveModel as Default>::default();

        if let Some(title) = patch.title {
            model.title = Set(title);
        }
        if let Some(slug) = patch.slug {
            model.slug = Set(slug);
        }
        if let Some(content) = patch.content {
            model.content = Set(content);
        }
        if let Some(excerpt) = patch.excerpt {
            model.excerpt = Set(excerpt);
        }
        if let Some(date) = patch.date {
            model.date = Set(date);
        }
        if let Some(author) = patch.author {
            model.author = Set(author);
        }
        if let Some(read_time) = patch.read_time {
            model.read_time = Set(read_time);
        }
        if let Some(category) = patch.category {
            model.category = Set(category);
        }
        if let Some(published) = patch.published {
            model.published = Set(published);
        }
        if let Some(featured) = patch.featured {
            model.featured = Set(featured);
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
            .ok_or(BlogRepositoryError::NotFound)?;

        Ok(model_to_view(row))
    }

    async fn delete(&self, id: Uuid) -> Result<(), BlogRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(BlogRepositoryError::NotFound);
        }

        Ok(())
    }

    async fn increment_views(&self, id: Uuid) -> Result<(), BlogRepositoryError> {
        let result = Entity::update_many()
            .col_expr(Column::Views, Expr::col(Column::Views).add(1))
            .filter(Column::Id.eq(id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(BlogRepositoryError::NotFound);
        }

        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn map_slug_error(e: DbErr) -> BlogRepositoryError {
    let msg = e.to_string().to_lowercase();

    if (msg.contains("duplicate") || msg.contains("unique") || msg.contains("23505"))
        && msg.contains("slug")
    {
        BlogRepositoryError::SlugTaken
    } else {
        BlogRepositoryError::DatabaseError(e.to_string())
    }
}

fn map_db_err(e: DbErr) -> BlogRepositoryError {
    BlogRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn new_blog_data(slug: &str) -> NewBlogData {
        NewBlogData {
            title: "Corporate Restructuring Basics".to_string(),
            slug: slug.to_string(),
            content: "Body".to_string(),
            excerpt: "Summary".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
            author: "Jane Doe".to_string(),
            read_time: "6 min".to_string(),
            category: "Corporate Law".to_string(),
            published: true,
            featured: false,
            meta_description: None,
            keywords: None,
        }
    }

    #[tokio::test]
    async fn create_duplicate_slug_maps_to_slug_taken() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom(
                "duplicate key value violates unique constraint \"blogs_slug_key\"".to_string(),
            )])
            .into_connection();

        let repo = BlogRepositoryPostgres::new(Arc::new(db));
        let result = repo.create(new_blog_data("taken")).await;

        assert!(matches!(result.unwrap_err(), BlogRepositoryError::SlugTaken));
    }

    #[tokio::test]
    async fn delete_missing_row_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = BlogRepositoryPostgres::new(Arc::new(db));
        let result = repo.delete(Uuid::new_v4()).await;

        assert!(matches!(result.unwrap_err(), BlogRepositoryError::NotFound));
    }

    #[tokio::test]
    async fn delete_existing_row_succeeds() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let repo = BlogRepositoryPostgres::new(Arc::new(db));
        assert!(repo.delete(Uuid::new_v4()).await.is_ok());
    }

    #[tokio::test]
    async fn increment_views_missing_row_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = BlogRepositoryPostgres::new(Arc::new(db));
        let result = repo.increment_views(Uuid::new_v4()).await;

        assert!(matches!(result.unwrap_err(), BlogRepositoryError::NotFound));
    }
}
