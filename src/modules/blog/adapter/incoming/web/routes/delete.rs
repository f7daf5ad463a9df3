use actix_web::{delete, web, Responder};
use serde::Serialize;
use tracing::{error, info};
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::blog::application::use_cases::delete_blog::DeleteBlogError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize)]
struct DeletedResponse {
    message: String,
}

/// Delete a blog post.
#[utoipa::path(
    delete,
    path = "/api/blogs/{id}",
    tag = "blogs",
    responses(
        (status = 200, description = "Blog post deleted"),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Blog post not found"),
    )
)]
#[delete("/api/blogs/{id}")]
pub async fn delete_blog_handler(
    user: AuthenticatedUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Ok(id) = Uuid::parse_str(&path.into_inner()) else {
        return ApiResponse::not_found("BLOG_NOT_FOUND", "Blog post not found");
    };

    match data.blogs.delete.execute(id).await {
        Ok(()) => {
            info!(blog_id = %id, user_id = %user.user_id, "Blog post deleted");
            ApiResponse::success(DeletedResponse {
                message: "Blog post deleted".to_string(),
            })
        }

        Err(DeleteBlogError::NotFound) => {
            ApiResponse::not_found("BLOG_NOT_FOUND", "Blog post not found")
        }

        Err(ref e) => {
            error!(error = %e, "Blog deletion failed");
            ApiResponse::internal_error()
        }
    }
}
