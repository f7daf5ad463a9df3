use actix_web::{put, web, Responder};
use tracing::{error, info};
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::team::adapter::incoming::web::routes::create::CreateMemberRequestDto;
use crate::modules::team::application::use_cases::update_member::{
    UpdateMemberCommand, UpdateMemberError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Patch a team member. Omitted fields keep their stored values.
#[utoipa::path(
    put,
    path = "/api/team/{id}",
    tag = "team",
    request_body = CreateMemberRequestDto,
    responses(
        (status = 200, description = "Team member updated"),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Team member not found"),
        (status = 422, description = "Validation failed"),
    )
)]
#[put("/api/team/{id}")]
pub async fn update_member_handler(
    user: AuthenticatedUser,
    path: web::Path<String>,
    req: web::Json<CreateMemberRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Ok(id) = Uuid::parse_str(&path.into_inner()) else {
        return ApiResponse::not_found("TEAM_MEMBER_NOT_FOUND", "Team member not found");
    };

    let dto = req.into_inner();

    let command = match UpdateMemberCommand::new(
        id,
        dto.name,
        dto.title,
        dto.bio,
        dto.image,
        dto.specialties,
        dto.experience,
        dto.order_index,
        dto.active,
    ) {
        Ok(command) => command,
        Err(violations) => {
            return ApiResponse::unprocessable("Validation failed", violations.to_details());
        }
    };

    match data.team.update.execute(command).await {
        Ok(view) => {
            info!(member_id = %view.id, user_id = %user.user_id, "Team member updated");
            ApiResponse::success(view)
        }

        Err(UpdateMemberError::NotFound) => {
            ApiResponse::not_found("TEAM_MEMBER_NOT_FOUND", "Team member not found")
        }

        Err(ref e) => {
            error!(error = %e, "Team member update failed");
            ApiResponse::internal_error()
        }
    }
}
