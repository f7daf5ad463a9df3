use actix_web::{delete, web, Responder};
use tracing::{error, info};

use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::uploads::application::use_cases::delete_image::DeleteImageError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Admin image removal.
#[utoipa::path(
    delete,
    path = "/api/uploads/images/{filename}",
    tag = "uploads",
    responses(
        (status = 200, description = "Image deleted"),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "No such image"),
    )
)]
#[delete("/api/uploads/images/{filename}")]
pub async fn delete_image_handler(
    user: AuthenticatedUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let filename = path.into_inner();

    match data.uploads.delete.execute(&filename).await {
        Ok(()) => {
            info!(user_id = %user.user_id, filename = %filename, "Image deleted");
            ApiResponse::success(serde_json::json!({ "filename": filename }))
        }

        Err(DeleteImageError::NotFound) => {
            ApiResponse::not_found("IMAGE_NOT_FOUND", "Image not found")
        }

        Err(ref e) => {
            error!(error = %e, "Image deletion failed");
            ApiResponse::internal_error()
        }
    }
}
