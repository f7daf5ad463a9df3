use async_trait::async_trait;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::{
    sea_query::Expr, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::team::adapter::outgoing::sea_orm_entity::team_members::{
    self, Column, Entity,
};
use crate::modules::team::application::ports::outgoing::{
    TeamListFilter, TeamMemberView, TeamQuery, TeamQueryError, TeamSort,
};
use crate::shared::pagination::{PageRequest, PageResult};

// ============================================================================
// Query Implementation
// ============================================================================

#[derive(Clone)]
pub struct TeamQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TeamQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TeamQuery for TeamQueryPostgres {
    async fn list(
        &self,
        filter: TeamListFilter,
        sort: TeamSort,
        page: PageRequest,
    ) -> Result<PageResult<TeamMemberView>, TeamQueryError> {
        let mut query = Entity::find();

        if let Some(active) = filter.active {
            query = query.filter(Column::Active.eq(active));
        }

        if let Some(ref search) = filter.search {
            let pattern = format!("%{}%", search.trim());
            query = query.filter(
                Condition::any()
                    .add(Expr::col(Column::Name).ilike(&pattern))
                    .add(Expr::col(Column::Title).ilike(&pattern))
                    .add(Expr::col(Column::Bio).ilike(&pattern)),
            );
        }

        query = match sort {
            TeamSort::OrderAsc | TeamSort::Unknown => query.order_by_asc(Column::OrderIndex),
            TeamSort::NameAsc => query.order_by_asc(Column::Name),
            TeamSort::NameDesc => query.order_by_desc(Column::Name),
        };

        let total = query.clone().count(&*self.db).await.map_err(map_db_err)?;

        let rows = query
            .offset(page.offset())
            .limit(page.per_page())
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let items: Result<Vec<TeamMemberView>, TeamQueryError> =
            rows.into_iter().map(model_to_view).collect();

        Ok(PageResult {
            items: items?,
            total,
            page: page.page(),
            per_page: page.per_page(),
        })
    }

    async fn get_by_id(&self, id: Uuid) -> Result<TeamMemberView, TeamQueryError> {
        let row = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(TeamQueryError::NotFound)?;

        model_to_view(row)
    }

    async fn active(&self) -> Result<Vec<TeamMemberView>, TeamQueryError> {
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

pub(crate) fn model_to_view(model: team_members::Model) -> Result<TeamMemberView, TeamQueryError> {
    Ok(TeamMemberView {
        id: model.id,
        name: model.name,
        title: model.title,
        bio: model.bio,
        image: model.image,
        specialties: serde_json::from_value(model.specialties.clone())
            .map_err(|e| TeamQueryError::SerializationError(e.to_string()))?,
        experience: model.experience,
        order_index: model.order_index,
        active: model.active,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    })
}

fn map_db_err(e: DbErr) -> TeamQueryError {
    TeamQueryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
