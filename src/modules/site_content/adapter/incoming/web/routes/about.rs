use actix_web::{get, put, web, Responder};
use serde::Deserialize;
use tracing::{error, info};

use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::site_content::application::ports::outgoing::ImpactStat;
use crate::modules::site_content::application::use_cases::about::{AboutError, PutAboutCommand};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, utoipa::ToSchema)]
pub struct PutAboutRequestDto {
    pub intro: Option<String>,
    pub who_we_are: Option<String>,
    pub vision: Option<String>,
    pub mission: Option<String>,
    pub company_values: Option<Vec<String>>,
    pub impact_stats: Option<Vec<ImpactStat>>,
}

/// Admin view of the about page content.
#[utoipa::path(
    get,
    path = "/api/about",
    tag = "site-content",
    responses(
        (status = 200, description = "About content"),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Not set up yet"),
    )
)]
#[get("/api/about")]
pub async fn get_about_handler(
    _user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    about_response(data.site_content.get_about.execute().await)
}

/// Replace the about page content, creating it on first write.
#[utoipa::path(
    put,
    path = "/api/about",
    tag = "site-content",
    request_body = PutAboutRequestDto,
    responses(
        (status = 200, description = "About content saved"),
        (status = 401, description = "Missing or invalid token"),
        (status = 422, description = "Validation failed"),
    )
)]
#[put("/api/about")]
pub async fn put_about_handler(
    user: AuthenticatedUser,
    req: web::Json<PutAboutRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let command = match PutAboutCommand::new(
        dto.intro,
        dto.who_we_are,
        dto.vision,
        dto.mission,
        dto.company_values,
        dto.impact_stats,
    ) {
        Ok(command) => command,
        Err(violations) => {
            return ApiResponse::unprocessable("Validation failed", violations.to_details());
        }
    };

    match data.site_content.put_about.execute(command).await {
        Ok(view) => {
            info!(user_id = %user.user_id, "About content saved");
            ApiResponse::success(view)
        }
        Err(ref e) => {
            error!(error = %e, "About content save failed");
            ApiResponse::internal_error()
        }
    }
}

/// Public about page content.
#[utoipa::path(
    get,
    path = "/api/public/about",
    tag = "public",
    responses(
        (status = 200, description = "About content"),
        (status = 404, description = "Not set up yet"),
    )
)]
#[get("/api/public/about")]
pub async fn public_about_handler(data: web::Data<AppState>) -> impl Responder {
    about_response(data.site_content.get_about.execute().await)
}

fn about_response(
    result: Result<
        crate::modules::site_content::application::ports::outgoing::AboutView,
        AboutError,
    >,
) -> actix_web::HttpResponse {
    match result {
        Ok(view) => ApiResponse::success(view),

        Err(AboutError::NotFound) => {
            ApiResponse::not_found("ABOUT_NOT_FOUND", "About content has not been set up yet")
        }

        Err(ref e) => {
            error!(error = %e, "About content fetch failed");
            ApiResponse::internal_error()
        }
    }
}
