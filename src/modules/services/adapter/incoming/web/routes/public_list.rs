use actix_web::{get, web, Responder};
use tracing::error;

use crate::shared::api::ApiResponse;
use crate::AppState;

/// Public service catalog: active services in display order.
#[utoipa::path(
    get,
    path = "/api/public/services",
    tag = "public",
    responses((status = 200, description = "Active services"))
)]
#[get("/api/public/services")]
pub async fn public_services_handler(data: web::Data<AppState>) -> impl Responder {
    match data.services.active.execute().await {
        Ok(rows) => ApiResponse::success(rows),
        Err(e) => {
            error!(error = %e, "Public service list failed");
            ApiResponse::internal_error()
        }
    }
}
