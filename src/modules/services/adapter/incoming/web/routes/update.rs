use actix_web::{put, web, Responder};
use tracing::{error, info};
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::services::adapter::incoming::web::routes::create::CreateServiceRequestDto;
use crate::modules::services::application::use_cases::update_service::{
    UpdateServiceCommand, UpdateServiceError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Patch a service. Omitted fields keep their stored values.
#[utoipa::path(
    put,
    path = "/api/services/{id}",
    tag = "services",
    request_body = CreateServiceRequestDto,
    responses(
        (status = 200, description = "Service updated"),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Service not found"),
        (status = 422, description = "Validation failed or slug already in use"),
    )
)]
#[put("/api/services/{id}")]
pub async fn update_service_handler(
    user: AuthenticatedUser,
    path: web::Path<String>,
    req: web::Json<CreateServiceRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Ok(id) = Uuid::parse_str(&path.into_inner()) else {
        return ApiResponse::not_found("SERVICE_NOT_FOUND", "Service not found");
    };

    let dto = req.into_inner();

    let command = match UpdateServiceCommand::new(
        id,
        dto.title,
        dto.slug,
        dto.description,
        dto.icon,
        dto.link,
        dto.gradient,
        dto.order_index,
        dto.active,
        dto.overview,
        dto.features,
        dto.process_steps,
        dto.requirements,
        dto.benefits,
        dto.meta_description,
        dto.keywords,
    ) {
        Ok(command) => command,
        Err(violations) => {
            return ApiResponse::unprocessable("Validation failed", violations.to_details());
        }
    };

    match data.services.update.execute(command).await {
        Ok(view) => {
            info!(service_id = %view.id, user_id = %user.user_id, "Service updated");
            ApiResponse::success(view)
        }

        Err(UpdateServiceError::NotFound) => {
            ApiResponse::not_found("SERVICE_NOT_FOUND", "Service not found")
        }

        Err(UpdateServiceError::SlugTaken) => ApiResponse::unprocessable(
            "Validation failed",
            serde_json::json!({ "slug": "slug is already in use" }),
        ),

        Err(ref e) => {
            error!(error = %e, "Service update failed");
            ApiResponse::internal_error()
        }
    }
}
