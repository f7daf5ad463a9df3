use actix_web::{delete, web, Responder};
use serde::Serialize;
use tracing::{error, info};
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::team::application::use_cases::delete_member::DeleteMemberError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize)]
struct DeletedResponse {
    message: String,
}

/// Remove a team member.
#[utoipa::path(
    delete,
    path = "/api/team/{id}",
    tag = "team",
    responses(
        (status = 200, description = "Team member deleted"),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Team member not found"),
    )
)]
#[delete("/api/team/{id}")]
pub async fn delete_member_handler(
    user: AuthenticatedUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Ok(id) = Uuid::parse_str(&path.into_inner()) else {
        return ApiResponse::not_found("TEAM_MEMBER_NOT_FOUND", "Team member not found");
    };

    match data.team.delete.execute(id).await {
        Ok(()) => {
            info!(member_id = %id, user_id = %user.user_id, "Team member deleted");
            ApiResponse::success(DeletedResponse {
                message: "Team member deleted".to_string(),
            })
        }

        Err(DeleteMemberError::NotFound) => {
            ApiResponse::not_found("TEAM_MEMBER_NOT_FOUND", "Team member not found")
        }

        Err(ref e) => {
            error!(error = %e, "Team member deletion failed");
            ApiResponse::internal_error()
        }
    }
}
