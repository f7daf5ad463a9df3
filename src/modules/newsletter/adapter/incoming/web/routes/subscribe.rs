use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info};

use crate::modules::newsletter::application::use_cases::subscribe::{
    SubscribeCommand, SubscribeError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, utoipa::ToSchema)]
pub struct SubscribeRequestDto {
    pub email: Option<String>,
}

/// Public newsletter signup.
#[utoipa::path(
    post,
    path = "/api/public/subscribe",
    tag = "public",
    request_body = SubscribeRequestDto,
    responses(
        (status = 201, description = "Subscribed"),
        (status = 409, description = "Already subscribed"),
        (status = 422, description = "Validation failed"),
    )
)]
#[post("/api/public/subscribe")]
pub async fn subscribe_handler(
    req: web::Json<SubscribeRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match SubscribeCommand::new(req.into_inner().email) {
        Ok(command) => command,
        Err(violations) => {
            return ApiResponse::unprocessable("Validation failed", violations.to_details());
        }
    };

    match data.newsletter.subscribe.execute(command).await {
        Ok(view) => {
            info!(subscriber_id = %view.id, "Newsletter subscription");
            ApiResponse::created(view)
        }

        Err(SubscribeError::AlreadySubscribed) => ApiResponse::conflict(
            "EMAIL_ALREADY_SUBSCRIBED",
            "This email is already subscribed",
        ),

        Err(ref e) => {
            error!(error = %e, "Newsletter subscription failed");
            ApiResponse::internal_error()
        }
    }
}
