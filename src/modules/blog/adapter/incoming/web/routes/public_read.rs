use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::blog::application::use_cases::read_published_blog::ReadPublishedBlogError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Public read by slug. Each hit bumps the post's view counter.
#[utoipa::path(
    get,
    path = "/api/public/blogs/{slug}",
    tag = "public",
    responses(
        (status = 200, description = "Published blog post"),
        (status = 404, description = "No published post with this slug"),
    )
)]
#[get("/api/public/blogs/{slug}")]
pub async fn public_blog_by_slug_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.blogs.read_published.execute(&path.into_inner()).await {
        Ok(view) => ApiResponse::success(view),

        Err(ReadPublishedBlogError::NotFound) => {
            ApiResponse::not_found("BLOG_NOT_FOUND", "Blog post not found")
        }

        Err(ref e) => {
            error!(error = %e, "Public blog read failed");
            ApiResponse::internal_error()
        }
    }
}
