use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::team::application::use_cases::get_member::GetMemberError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Fetch one team member by id, inactive included.
#[utoipa::path(
    get,
    path = "/api/team/{id}",
    tag = "team",
    responses(
        (status = 200, description = "Team member"),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Team member not found"),
    )
)]
#[get("/api/team/{id}")]
pub async fn get_member_handler(
    _user: AuthenticatedUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Ok(id) = Uuid::parse_str(&path.into_inner()) else {
        return ApiResponse::not_found("TEAM_MEMBER_NOT_FOUND", "Team member not found");
    };

    match data.team.get.execute(id).await {
        Ok(view) => ApiResponse::success(view),

        Err(GetMemberError::NotFound) => {
            ApiResponse::not_found("TEAM_MEMBER_NOT_FOUND", "Team member not found")
        }

        Err(ref e) => {
            error!(error = %e, "Team member fetch failed");
            ApiResponse::internal_error()
        }
    }
}
