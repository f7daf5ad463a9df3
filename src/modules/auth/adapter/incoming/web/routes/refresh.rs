use actix_web::{post, web, Responder};
use tracing::{error, warn};

use crate::modules::auth::adapter::incoming::web::extractors::BearerToken;
use crate::modules::auth::application::use_cases::refresh::RefreshError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Refresh token
///
/// Issues a fresh token from one that is valid or expired within the grace
/// window; the presented token is retired.
#[utoipa::path(
    post,
    path = "/api/auth/refresh",
    tag = "auth",
    responses(
        (status = 200, description = "New token issued"),
        (status = 401, description = "Token cannot be refreshed"),
    )
)]
#[post("/api/auth/refresh")]
pub async fn refresh_handler(token: BearerToken, data: web::Data<AppState>) -> impl Responder {
    match data.auth.refresh.execute(&token.0).await {
        Ok(outcome) => ApiResponse::success(outcome),

        Err(RefreshError::CannotRefresh) => {
            warn!("Refresh refused");
            ApiResponse::unauthorized("TOKEN_REFRESH_FAILED", "Token cannot be refreshed")
        }

        Err(ref e) => {
            error!(error = %e, "Refresh failed unexpectedly");
            ApiResponse::internal_error()
        }
    }
}
