use actix_web::{delete, web, Responder};
use serde::Serialize;
use tracing::{error, info};
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::services::application::use_cases::delete_service::DeleteServiceError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize)]
struct DeletedResponse {
    message: String,
}

/// Delete a service.
#[utoipa::path(
    delete,
    path = "/api/services/{id}",
    tag = "services",
    responses(
        (status = 200, description = "Service deleted"),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Service not found"),
    )
)]
#[delete("/api/services/{id}")]
pub async fn delete_service_handler(
    user: AuthenticatedUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Ok(id) = Uuid::parse_str(&path.into_inner()) else {
        return ApiResponse::not_found("SERVICE_NOT_FOUND", "Service not found");
    };

    match data.services.delete.execute(id).await {
        Ok(()) => {
            info!(service_id = %id, user_id = %user.user_id, "Service deleted");
            ApiResponse::success(DeletedResponse {
                message: "Service deleted".to_string(),
            })
        }

        Err(DeleteServiceError::NotFound) => {
            ApiResponse::not_found("SERVICE_NOT_FOUND", "Service not found")
        }

        Err(ref e) => {
            error!(error = %e, "Service deletion failed");
            ApiResponse::internal_error()
        }
    }
}
