use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::BearerToken;
use crate::modules::auth::application::use_cases::current_user::CurrentUserError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Current account
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = "auth",
    responses(
        (status = 200, description = "Current user"),
        (status = 401, description = "Invalid, expired or revoked token"),
    )
)]
#[get("/api/auth/me")]
pub async fn me_handler(token: BearerToken, data: web::Data<AppState>) -> impl Responder {
    match data.auth.current_user.execute(&token.0).await {
        Ok(user) => ApiResponse::success(user),

        Err(CurrentUserError::InvalidToken) => {
            ApiResponse::unauthorized("INVALID_TOKEN", "Invalid or expired token")
        }

        Err(ref e) => {
            error!(error = %e, "Failed to resolve current user");
            ApiResponse::internal_error()
        }
    }
}
