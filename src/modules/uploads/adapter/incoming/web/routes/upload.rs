use actix_multipart::Multipart;
use actix_web::{post, web, HttpResponse, Responder};
use futures::TryStreamExt;
use tracing::{error, info};

use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::uploads::application::use_cases::upload_image::{
    UploadImageCommand, MAX_UPLOAD_BYTES,
};
use crate::shared::api::ApiResponse;
use crate::shared::validation::Violations;
use crate::AppState;

/// Admin image upload. The size cap is enforced while the body streams in
/// so an oversized upload is rejected without buffering it whole.
#[utoipa::path(
    post,
    path = "/api/uploads/images",
    tag = "uploads",
    responses(
        (status = 201, description = "Image stored"),
        (status = 401, description = "Missing or invalid token"),
        (status = 422, description = "Not an accepted image or too large"),
    )
)]
#[post("/api/uploads/images")]
pub async fn upload_image_handler(
    _user: AuthenticatedUser,
    mut payload: Multipart,
    data: web::Data<AppState>,
) -> impl Responder {
    let mut field = match payload.try_next().await {
        Ok(Some(field)) => field,
        Ok(None) => return file_violation("file is required"),
        Err(e) => {
            error!(error = %e, "Malformed multipart payload");
            return file_violation("file is required");
        }
    };

    let original_filename = field
        .content_disposition()
        .and_then(|cd| cd.get_filename())
        .map(str::to_string);
    let mime_type = field.content_type().map(|m| m.to_string());

    let mut bytes: Vec<u8> = Vec::new();
    loop {
        match field.try_next().await {
            Ok(Some(chunk)) => {
                if bytes.len() + chunk.len() > MAX_UPLOAD_BYTES {
                    return file_violation("file must be at most 10 MB");
                }
                bytes.extend_from_slice(&chunk);
            }
            Ok(None) => break,
            Err(e) => {
                error!(error = %e, "Upload stream aborted");
                return file_violation("file could not be read");
            }
        }
    }

    let command = match UploadImageCommand::new(original_filename, mime_type, bytes) {
        Ok(command) => command,
        Err(violations) => {
            return ApiResponse::unprocessable("Validation failed", violations.to_details());
        }
    };

    match data.uploads.upload.execute(command).await {
        Ok(view) => {
            info!(filename = %view.filename, size = view.size, "Image uploaded");
            ApiResponse::created(view)
        }
        Err(ref e) => {
            error!(error = %e, "Image upload failed");
            ApiResponse::internal_error()
        }
    }
}

fn file_violation(message: &str) -> HttpResponse {
    let mut v = Violations::new();
    v.add("file", message);
    ApiResponse::unprocessable("Validation failed", v.to_details())
}
