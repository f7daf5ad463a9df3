use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info};

use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::services::application::ports::outgoing::ProcessStep;
use crate::modules::services::application::use_cases::create_service::{
    CreateServiceCommand, CreateServiceError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, utoipa::ToSchema)]
pub struct CreateServiceRequestDto {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub link: Option<String>,
    pub gradient: Option<String>,
    pub order_index: Option<i32>,
    pub active: Option<bool>,
    pub overview: Option<String>,
    pub features: Option<Vec<String>>,
    pub process_steps: Option<Vec<ProcessStep>>,
    pub requirements: Option<Vec<String>>,
    pub benefits: Option<Vec<String>>,
    pub meta_description: Option<String>,
    pub keywords: Option<String>,
}

/// Create a service.
#[utoipa::path(
    post,
    path = "/api/services",
    tag = "services",
    request_body = CreateServiceRequestDto,
    responses(
        (status = 201, description = "Service created"),
        (status = 401, description = "Missing or invalid token"),
        (status = 422, description = "Validation failed or slug already in use"),
    )
)]
#[post("/api/services")]
pub async fn create_service_handler(
    user: AuthenticatedUser,
    req: web::Json<CreateServiceRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let command = match CreateServiceCommand::new(
        dto.title,
        dto.slug,
        dto.description,
        dto.icon,
        dto.link,
        dto.gradient,
        dto.order_index,
        dto.active,
        dto.overview,
        dto.features,
        dto.process_steps,
        dto.requirements,
        dto.benefits,
        dto.meta_description,
        dto.keywords,
    ) {
        Ok(command) => command,
        Err(violations) => {
            return ApiResponse::unprocessable("Validation failed", violations.to_details());
        }
    };

    match data.services.create.execute(command).await {
        Ok(view) => {
            info!(service_id = %view.id, user_id = %user.user_id, "Service created");
            ApiResponse::created(view)
        }

        // A taken slug is a field violation like any other.
        Err(CreateServiceError::SlugTaken) => ApiResponse::unprocessable(
            "Validation failed",
            serde_json::json!({ "slug": "slug is already in use" }),
        ),

        Err(ref e) => {
            error!(error = %e, "Service creation failed");
            ApiResponse::internal_error()
        }
    }
}
