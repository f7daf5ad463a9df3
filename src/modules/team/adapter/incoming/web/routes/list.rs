use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::team::application::ports::outgoing::{TeamListFilter, TeamSort};
use crate::shared::api::{ApiResponse, Pagination};
use crate::shared::pagination::PageRequest;
use crate::AppState;

#[derive(Deserialize, utoipa::IntoParams)]
pub struct TeamListQueryDto {
    #[serde(default)]
    pub page: u64,
    #[serde(default)]
    pub per_page: u64,
    pub active: Option<bool>,
    pub search: Option<String>,
    #[serde(default)]
    pub sort: TeamSort,
}

/// Admin team list in display order.
#[utoipa::path(
    get,
    path = "/api/team",
    tag = "team",
    params(TeamListQueryDto),
    responses(
        (status = 200, description = "Paginated team list"),
        (status = 401, description = "Missing or invalid token"),
    )
)]
#[get("/api/team")]
pub async fn list_team_handler(
    _user: AuthenticatedUser,
    query: web::Query<TeamListQueryDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let query = query.into_inner();

    let filter = TeamListFilter {
        active: query.active,
        search: query.search,
    };
    let page = PageRequest::new(query.page, query.per_page);

    match data.team.list.execute(filter, query.sort, page).await {
        Ok(result) => {
            let pagination = Pagination::new(result.page, result.per_page, result.total);
            ApiResponse::paginated(result.items, pagination)
        }
        Err(e) => {
            error!(error = %e, "Team list failed");
            ApiResponse::internal_error()
        }
    }
}
