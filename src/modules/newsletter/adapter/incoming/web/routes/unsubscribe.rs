use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info};

use crate::modules::newsletter::application::use_cases::unsubscribe::{
    UnsubscribeCommand, UnsubscribeError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, utoipa::ToSchema)]
pub struct UnsubscribeRequestDto {
    pub email: Option<String>,
}

/// Public newsletter opt-out. The row is kept with `active = false`.
#[utoipa::path(
    post,
    path = "/api/public/unsubscribe",
    tag = "public",
    request_body = UnsubscribeRequestDto,
    responses(
        (status = 200, description = "Unsubscribed"),
        (status = 404, description = "Email was never subscribed"),
        (status = 422, description = "Validation failed"),
    )
)]
#[post("/api/public/unsubscribe")]
pub async fn unsubscribe_handler(
    req: web::Json<UnsubscribeRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match UnsubscribeCommand::new(req.into_inner().email) {
        Ok(command) => command,
        Err(violations) => {
            return ApiResponse::unprocessable("Validation failed", violations.to_details());
        }
    };

    match data.newsletter.unsubscribe.execute(command).await {
        Ok(view) => {
            info!(subscriber_id = %view.id, "Newsletter unsubscription");
            ApiResponse::success(view)
        }

        Err(UnsubscribeError::NotFound) => ApiResponse::not_found(
            "SUBSCRIBER_NOT_FOUND",
            "This email is not on the subscriber list",
        ),

        Err(ref e) => {
            error!(error = %e, "Newsletter unsubscription failed");
            ApiResponse::internal_error()
        }
    }
}
