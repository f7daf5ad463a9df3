use actix_web::{post, web, HttpRequest, Responder};
use serde::Deserialize;
use tracing::{error, info};

use crate::modules::inquiry::application::use_cases::submit_inquiry::SubmitInquiryCommand;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, utoipa::ToSchema)]
pub struct SubmitInquiryRequestDto {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

/// Public contact form. IP and user agent are taken from the request,
/// never from the payload.
#[utoipa::path(
    post,
    path = "/api/public/contact",
    tag = "public",
    request_body = SubmitInquiryRequestDto,
    responses(
        (status = 201, description = "Inquiry recorded"),
        (status = 422, description = "Validation failed"),
    )
)]
#[post("/api/public/contact")]
pub async fn submit_inquiry_handler(
    http: HttpRequest,
    req: web::Json<SubmitInquiryRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let ip_address = http
        .connection_info()
        .realip_remote_addr()
        .map(str::to_string);
    let user_agent = http
        .headers()
        .get(actix_web::http::header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let command = match SubmitInquiryCommand::new(
        dto.name,
        dto.email,
        dto.phone,
        dto.subject,
        dto.message,
        ip_address,
        user_agent,
    ) {
        Ok(command) => command,
        Err(violations) => {
            return ApiResponse::unprocessable("Validation failed", violations.to_details());
        }
    };

    match data.inquiries.submit.execute(command).await {
        Ok(view) => {
            info!(inquiry_id = %view.id, "Contact inquiry received");
            ApiResponse::created(view)
        }
        Err(ref e) => {
            error!(error = %e, "Contact inquiry submission failed");
            ApiResponse::internal_error()
        }
    }
}
