use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info};

use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::team::application::use_cases::create_member::{
    CreateMemberCommand, CreateMemberError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, utoipa::ToSchema)]
pub struct CreateMemberRequestDto {
    pub name: Option<String>,
    pub title: Option<String>,
    pub bio: Option<String>,
    pub image: Option<String>,
    pub specialties: Option<Vec<String>>,
    pub experience: Option<String>,
    pub order_index: Option<i32>,
    pub active: Option<bool>,
}

/// Add a team member.
#[utoipa::path(
    post,
    path = "/api/team",
    tag = "team",
    request_body = CreateMemberRequestDto,
    responses(
        (status = 201, description = "Team member created"),
        (status = 401, description = "Missing or invalid token"),
        (status = 422, description = "Validation failed"),
    )
)]
#[post("/api/team")]
pub async fn create_member_handler(
    user: AuthenticatedUser,
    req: web::Json<CreateMemberRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let command = match CreateMemberCommand::new(
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

    match data.team.create.execute(command).await {
        Ok(view) => {
            info!(member_id = %view.id, user_id = %user.user_id, "Team member created");
            ApiResponse::created(view)
        }

        Err(CreateMemberError::RepositoryError(ref e)) => {
            error!(error = %e, "Team member creation failed");
            ApiResponse::internal_error()
        }
    }
}
