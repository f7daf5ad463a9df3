use async_trait::async_trait;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::{
    sea_query::Expr, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::services::adapter::outgoing::sea_orm_entity::services::{
    self, Column, Entity,
};
use crate::modules::services::application::ports::outgoing::{
    ServiceListFilter, ServiceQuery, ServiceQueryError, ServiceSort, ServiceView,
};
use crate::shared::pagination::{PageRequest, PageResult};

// ============================================================================
// Query Implementation
// ============================================================================

#[derive(Clone)]
pub struct ServiceQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ServiceQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ServiceQuery for ServiceQueryPostgres {
    async fn list(
        &self,
        filter: ServiceListFilter,
        sort: ServiceSort,
        page: PageRequest,
    ) -> Result<PageResult<ServiceView>, ServiceQueryError> {
        let mut query = Entity::find();

        if let Some(active) = filter.active {
            query = query.filter(Column::Active.eq(active));
        }

        if let Some(ref search) = filter.search {
            let pattern = format!("%{}%", search.trim());
            query = query.filter(
                Condition::any()
                    .add(Expr::col(Column::Title).ilike(&pattern))
                    .add(Expr::col(Column::Description).ilike(&pattern))
                    .add(Expr::col(Column::Overview).ilike(&pattern)),
            );
        }

        query = match sort {
            ServiceSort::OrderAsc | ServiceSort::Unknown => query.order_by_asc(Column::OrderIndex),
            ServiceSort::TitleAsc => query.order_by_asc(Column::Title),
            ServiceSort::TitleDesc => query.order_by_desc(Column::Title),
            ServiceSort::ViewsDesc => query.order_by_desc(Column::Views),
        };

        let total = query.clone().count(&*self.db).await.map_err(map_db_err)?;

        let rows = query
            .offset(page.offset())
            .limit(page.per_page())
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let items: Result<Vec<ServiceView>, ServiceQueryError> =
            rows.into_iter().map(model_to_view).collect();

        Ok(PageResult {
            items: items?,
            total,
            page: page.page(),
            per_page: page.per_page(),
        })
    }

    async fn get_by_id(&self, id: Uuid) -> Result<ServiceView, ServiceQueryError> {
        let row = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(ServiceQueryError::NotFound)?;

        model_to_view(row)
    }

    async fn get_active_by_slug(&self, slug: &str) -> Result<ServiceView, ServiceQueryError> {
        let normalized = slug.trim().to_lowercase();

        let row = Entity::find()
            .filter(Column::Slug.eq(&normalized))
            .filter(Column::Active.eq(true))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(ServiceQueryError::NotFound)?;

        model_to_view(row)
    }

    async fn active(&self) -> Result<Vec<ServiceView>, ServiceQueryError> {
        let rows = Entity::find()
            .filter(Column::Active.eq(true))
            .order_by_asc(Column::OrderIndex)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        rows.into_iter().map(model_to_view).collect()
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

pub(crate) fn model_to_view(model: services::Model) -> Result<ServiceView, ServiceQueryError> {
    Ok(ServiceView {
        id: model.id,
        title: model.title,
        slug: model.slug,
        description: model.description,
        icon: model.icon,
        link: model.link,
        gradient: model.gradient,
        order_index: model.order_index,
        active: model.active,
        views: model.views,
        overview: model.overview,
        features: from_json(&model.features)?,
        process_steps: from_json(&model.process_steps)?,
        requirements: from_json(&model.requirements)?,
        benefits: from_json(&model.benefits)?,
        meta_description: model.meta_description,
        keywords: model.keywords,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    })
}

fn from_json<T: serde::de::DeserializeOwned>(
    json: &serde_json::Value,
) -> Result<T, ServiceQueryError> {
    serde_json::from_value(json.clone())
        .map_err(|e| ServiceQueryError::SerializationError(e.to_string()))
}

fn map_db_err(e: DbErr) -> ServiceQueryError {
    ServiceQueryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
