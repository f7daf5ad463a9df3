use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::blog::application::use_cases::get_blog::GetBlogError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Fetch one blog post by id, drafts included.
#[utoipa::path(
    get,
    path = "/api/blogs/{id}",
    tag = "blogs",
    responses(
        (status = 200, description = "Blog post"),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Blog post not found"),
    )
)]
#[get("/api/blogs/{id}")]
pub async fn get_blog_handler(
    _user: AuthenticatedUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    // A malformed id can never match a row, so it reads as absent.
    let Ok(id) = Uuid::parse_str(&path.into_inner()) else {
        return ApiResponse::not_found("BLOG_NOT_FOUND", "Blog post not found");
    };

    match data.blogs.get.execute(id).await {
        Ok(view) => ApiResponse::success(view),

        Err(GetBlogError::NotFound) => {
            ApiResponse::not_found("BLOG_NOT_FOUND", "Blog post not found")
        }

        Err(ref e) => {
            error!(error = %e, "Blog fetch failed");
            ApiResponse::internal_error()
        }
    }
}
