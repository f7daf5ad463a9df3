use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::services::application::use_cases::get_service::GetServiceError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Fetch one service by id, inactive included.
#[utoipa::path(
    get,
    path = "/api/services/{id}",
    tag = "services",
    responses(
        (status = 200, description = "Service"),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Service not found"),
    )
)]
#[get("/api/services/{id}")]
pub async fn get_service_handler(
    _user: AuthenticatedUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Ok(id) = Uuid::parse_str(&path.into_inner()) else {
        return ApiResponse::not_found("SERVICE_NOT_FOUND", "Service not found");
    };

    match data.services.get.execute(id).await {
        Ok(view) => ApiResponse::success(view),

        Err(GetServiceError::NotFound) => {
            ApiResponse::not_found("SERVICE_NOT_FOUND", "Service not found")
        }

        Err(ref e) => {
            error!(error = %e, "Service fetch failed");
            ApiResponse::internal_error()
        }
    }
}
