use actix_web::{post, web, Responder};
use serde::Serialize;
use tracing::{error, info};

use crate::modules::auth::adapter::incoming::web::extractors::BearerToken;
use crate::modules::auth::application::use_cases::logout::LogoutError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize)]
struct LogoutResponse {
    message: &'static str,
}

/// Logout
///
/// Revokes the presented token. Safe to call twice.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = "auth",
    responses(
        (status = 200, description = "Token revoked"),
        (status = 500, description = "Revocation store unavailable"),
    )
)]
#[post("/api/auth/logout")]
pub async fn logout_handler(token: BearerToken, data: web::Data<AppState>) -> impl Responder {
    match data.auth.logout.execute(&token.0).await {
        Ok(()) => {
            info!("User logged out");
            ApiResponse::success(LogoutResponse {
                message: "Logged out",
            })
        }

        Err(LogoutError::Failed(ref e)) => {
            error!(error = %e, "Logout failed");
            ApiResponse::internal_error_with_code("LOGOUT_FAILED")
        }
    }
}
