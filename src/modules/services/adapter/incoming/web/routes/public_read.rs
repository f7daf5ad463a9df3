use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::services::application::use_cases::read_active_service::ReadActiveServiceError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Public read by slug. Each hit bumps the service's view counter.
#[utoipa::path(
    get,
    path = "/api/public/services/{slug}",
    tag = "public",
    responses(
        (status = 200, description = "Active service"),
        (status = 404, description = "No active service with this slug"),
    )
)]
#[get("/api/public/services/{slug}")]
pub async fn public_service_by_slug_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.services.read_active.execute(&path.into_inner()).await {
        Ok(view) => ApiResponse::success(view),

        Err(ReadActiveServiceError::NotFound) => {
            ApiResponse::not_found("SERVICE_NOT_FOUND", "Service not found")
        }

        Err(ref e) => {
            error!(error = %e, "Public service read failed");
            ApiResponse::internal_error()
        }
    }
}
