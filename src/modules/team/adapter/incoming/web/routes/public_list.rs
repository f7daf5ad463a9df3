use actix_web::{get, web, Responder};
use tracing::error;

use crate::shared::api::ApiResponse;
use crate::AppState;

/// Public team roster: active members in display order.
#[utoipa::path(
    get,
    path = "/api/public/team",
    tag = "public",
    responses((status = 200, description = "Active team members"))
)]
#[get("/api/public/team")]
pub async fn public_team_handler(data: web::Data<AppState>) -> impl Responder {
    match data.team.active.execute().await {
        Ok(rows) => ApiResponse::success(rows),
        Err(e) => {
            error!(error = %e, "Public team list failed");
            ApiResponse::internal_error()
        }
    }
}
