use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};

use crate::modules::auth::application::use_cases::login::{LoginCommand, LoginError};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, utoipa::ToSchema)]
pub struct LoginRequestDto {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Admin login
///
/// Exchanges username/password for a bearer token. Repeated failures lock the
/// account for a configured interval.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Login successful"),
        (status = 401, description = "Invalid credentials"),
        (status = 422, description = "Missing username or password"),
        (status = 423, description = "Account temporarily locked"),
        (status = 500, description = "Token creation failed"),
    )
)]
#[post("/api/auth/login")]
pub async fn login_handler(
    req: web::Json<LoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let command = match LoginCommand::new(dto.username, dto.password) {
        Ok(command) => command,
        Err(violations) => {
            return ApiResponse::unprocessable("Validation failed", violations.to_details());
        }
    };

    info!(username = %command.username(), "Login attempt");

    match data.auth.login.execute(command).await {
        Ok(outcome) => {
            info!(user_id = %outcome.user.id, "User logged in");
            ApiResponse::success(outcome)
        }

        Err(LoginError::InvalidCredentials) => {
            warn!("Login failed: invalid credentials");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid username or password")
        }

        Err(LoginError::AccountLocked) => {
            warn!("Login refused: account locked");
            ApiResponse::locked(
                "ACCOUNT_LOCKED",
                "Account is temporarily locked due to repeated failed logins",
            )
        }

        Err(LoginError::TokenCreationFailed(ref e)) => {
            error!(error = %e, "Token creation failed");
            ApiResponse::internal_error_with_code("TOKEN_CREATION_FAILED")
        }

        Err(ref e) => {
            error!(error = %e, "Login failed unexpectedly");
            ApiResponse::internal_error()
        }
    }
}
