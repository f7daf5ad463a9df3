use async_trait::async_trait;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::{
    sea_query::Expr, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::blog::adapter::outgoing::sea_orm_entity::blogs::{self, Column, Entity};
use crate::modules::blog::application::ports::outgoing::{
    BlogListFilter, BlogQuery, BlogQueryError, BlogSort, BlogView,
};
use crate::shared::pagination::{PageRequest, PageResult};

// ============================================================================
// Query Implementation
// ============================================================================

#[derive(Clone)]
pub struct BlogQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl BlogQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BlogQuery for BlogQueryPostgres {
    async fn list(
        &self,
        filter: BlogListFilter,
        sort: BlogSort,
        page: PageRequest,
    ) -> Result<PageResult<BlogView>, BlogQueryError> {
        let mut query = Entity::find();

        if let Some(published) = filter.published {
            query = query.filter(Column::Published.eq(published));
        }

        if let Some(featured) = filter.featured {
            query = query.filter(Column::Featured.eq(featured));
        }

        if let Some(ref category) = filter.category {
            query = query.filter(Column::Category.eq(category.trim()));
        }

        if let Some(ref search) = filter.search {
            let pattern = format!("%{}%", search.trim());
            query = query.filter(
                Condition::any()
                    .add(Expr::col(Column::Title).ilike(&pattern))
                    .add(Expr::col(Column::Excerpt).ilike(&pattern))
                    .add(Expr::col(Column::Content).ilike(&pattern)),
            );
        }

        query = match sort {
            BlogSort::DateDesc | BlogSort::Unknown => query.order_by_desc(Column::Date),
            BlogSort::DateAsc => query.order_by_asc(Column::Date),
            BlogSort::TitleAsc => query.order_by_asc(Column::Title),
            BlogSort::TitleDesc => query.order_by_desc(Column::Title),
            BlogSort::ViewsDesc => query.order_by_desc(Column::Views),
        };

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

    async fn get_by_id(&self, id: Uuid) -> Result<BlogView, BlogQueryError> {
        let row = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(BlogQueryError::NotFound)?;

        Ok(model_to_view(row))
    }

    async fn get_published_by_slug(&self, slug: &str) -> Result<BlogView, BlogQueryError> {
        let normalized = slug.trim().to_lowercase();

        let row = Entity::find()
            .filter(Column::Slug.eq(&normalized))
            .filter(Column::Published.eq(true))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(BlogQueryError::NotFound)?;

        Ok(model_to_view(row))
    }

    async fn featured(&self, limit: u64) -> Result<Vec<BlogView>, BlogQueryError> {
        let rows = Entity::find()
            .filter(Column::Featured.eq(true))
            .filter(Column::Published.eq(true))
            .order_by_desc(Column::Date)
            .limit(limit)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(model_to_view).collect())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

pub(crate) fn model_to_view(model: blogs::Model) -> BlogView {
    BlogView {
        id: model.id,
        title: model.title,
        slug: model.slug,
        content: model.content,
        excerpt: model.excerpt,
        date: model.date,
        author: model.author,
        read_time: model.read_time,
        category: model.category,
        views: model.views,
        published: model.published,
        featured: model.featured,
        meta_description: model.meta_description,
        keywords: model.keywords,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    }
}

fn map_db_err(e: DbErr) -> BlogQueryError {
    BlogQueryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use sea_orm::{DatabaseBackend, MockDatabase};

    pub(crate) fn mock_blog_model(id: Uuid, slug: &str, published: bool) -> blogs::Model {
        let now = Utc::now().fixed_offset();

        blogs::Model {
            id,
            title: "Corporate Restructuring Basics".to_string(),
            slug: slug.to_string(),
            content: "Body".to_string(),
            excerpt: "Summary".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
            author: "Jane Doe".to_string(),
            read_time: "6 min".to_string(),
            category: "Corporate Law".to_string(),
            views: 12,
            published,
            featured: false,
            meta_description: None,
            keywords: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn get_by_id_success() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![mock_blog_model(id, "a-post", true)]])
            .into_connection();

        let query = BlogQueryPostgres::new(Arc::new(db));
        let view = query.get_by_id(id).await.unwrap();

        assert_eq!(view.id, id);
        assert_eq!(view.views, 12);
    }

    #[tokio::test]
    async fn get_by_id_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<blogs::Model>::new()])
            .into_connection();

        let query = BlogQueryPostgres::new(Arc::new(db));
        let result = query.get_by_id(Uuid::new_v4()).await;

        assert!(matches!(result.unwrap_err(), BlogQueryError::NotFound));
    }

    #[tokio::test]
    async fn get_published_by_slug_normalizes_input() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![mock_blog_model(id, "a-post", true)]])
            .into_connection();

        let query = BlogQueryPostgres::new(Arc::new(db));
        let view = query.get_published_by_slug("  A-POST  ").await.unwrap();

        assert_eq!(view.slug, "a-post");
    }

    #[tokio::test]
    async fn get_published_by_slug_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<blogs::Model>::new()])
            .into_connection();

        let query = BlogQueryPostgres::new(Arc::new(db));
        let result = query.get_published_by_slug("draft").await;

        assert!(matches!(result.unwrap_err(), BlogQueryError::NotFound));
    }

    #[tokio::test]
    async fn featured_maps_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![
                mock_blog_model(Uuid::new_v4(), "one", true),
                mock_blog_model(Uuid::new_v4(), "two", true),
            ]])
            .into_connection();

        let query = BlogQueryPostgres::new(Arc::new(db));
        let rows = query.featured(3).await.unwrap();

        assert_eq!(rows.len(), 2);
    }

    #[tokio::test]
    async fn list_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom("connection error".to_string())])
            .into_connection();

        let query = BlogQueryPostgres::new(Arc::new(db));
        let result = query
            .list(
                BlogListFilter::default(),
                BlogSort::default(),
                PageRequest::default(),
            )
            .await;

        assert!(matches!(
            result.unwrap_err(),
            BlogQueryError::DatabaseError(_)
        ));
    }

    // Note: list() uses count() which is difficult to mock with MockDatabase.
    // Use integration tests for full list coverage.
}
