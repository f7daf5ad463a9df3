use actix_web::{get, put, web, Responder};
use serde::Deserialize;
use tracing::{error, info};

use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::site_content::application::use_cases::contact_settings::{
    ContactSettingsError, PutContactSettingsCommand,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, utoipa::ToSchema)]
pub struct PutContactSettingsRequestDto {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub whatsapp: Option<String>,
    pub address: Option<String>,
    pub map_embed: Option<String>,
    pub office_hours: Option<String>,
}

/// Admin view of the firm's contact settings.
#[utoipa::path(
    get,
    path = "/api/contact-settings",
    tag = "site-content",
    responses(
        (status = 200, description = "Contact settings"),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Not set up yet"),
    )
)]
#[get("/api/contact-settings")]
pub async fn get_contact_settings_handler(
    _user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    contact_response(data.site_content.get_contact.execute().await)
}

/// Replace the contact settings, creating them on first write.
#[utoipa::path(
    put,
    path = "/api/contact-settings",
    tag = "site-content",
    request_body = PutContactSettingsRequestDto,
    responses(
        (status = 200, description = "Contact settings saved"),
        (status = 401, description = "Missing or invalid token"),
        (status = 422, description = "Validation failed"),
    )
)]
#[put("/api/contact-settings")]
pub async fn put_contact_settings_handler(
    user: AuthenticatedUser,
    req: web::Json<PutContactSettingsRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let command = match PutContactSettingsCommand::new(
        dto.email,
        dto.phone,
        dto.whatsapp,
        dto.address,
        dto.map_embed,
        dto.office_hours,
    ) {
        Ok(command) => command,
        Err(violations) => {
            return ApiResponse::unprocessable("Validation failed", violations.to_details());
        }
    };

    match data.site_content.put_contact.execute(command).await {
        Ok(view) => {
            info!(user_id = %user.user_id, "Contact settings saved");
            ApiResponse::success(view)
        }
        Err(ref e) => {
            error!(error = %e, "Contact settings save failed");
            ApiResponse::internal_error()
        }
    }
}

/// Public contact details.
#[utoipa::path(
    get,
    path = "/api/public/contact",
    tag = "public",
    responses(
        (status = 200, description = "Contact settings"),
        (status = 404, description = "Not set up yet"),
    )
)]
#[get("/api/public/contact")]
pub async fn public_contact_handler(data: web::Data<AppState>) -> impl Responder {
    contact_response(data.site_content.get_contact.execute().await)
}

fn contact_response(
    result: Result<
        crate::modules::site_content::application::ports::outgoing::ContactSettingsView,
        ContactSettingsError,
    >,
) -> actix_web::HttpResponse {
    match result {
        Ok(view) => ApiResponse::success(view),

        Err(ContactSettingsError::NotFound) => ApiResponse::not_found(
            "CONTACT_SETTINGS_NOT_FOUND",
            "Contact settings have not been set up yet",
        ),

        Err(ref e) => {
            error!(error = %e, "Contact settings fetch failed");
            ApiResponse::internal_error()
        }
    }
}
