use actix_web::{put, web, Responder};
use tracing::{error, info};
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::blog::adapter::incoming::web::routes::create::CreateBlogRequestDto;
use crate::modules::blog::application::use_cases::update_blog::{UpdateBlogCommand, UpdateBlogError};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Patch a blog post. Omitted fields keep their stored values.
#[utoipa::path(
    put,
    path = "/api/blogs/{id}",
    tag = "blogs",
    request_body = CreateBlogRequestDto,
    responses(
        (status = 200, description = "Blog post updated"),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Blog post not found"),
        (status = 422, description = "Validation failed or slug already in use"),
    )
)]
#[put("/api/blogs/{id}")]
pub async fn update_blog_handler(
    user: AuthenticatedUser,
    path: web::Path<String>,
    req: web::Json<CreateBlogRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Ok(id) = Uuid::parse_str(&path.into_inner()) else {
        return ApiResponse::not_found("BLOG_NOT_FOUND", "Blog post not found");
    };

    let dto = req.into_inner();

    let command = match UpdateBlogCommand::new(
        id,
        dto.title,
        dto.slug,
        dto.content,
        dto.excerpt,
        dto.date,
        dto.author,
        dto.read_time,
        dto.category,
        dto.published,
        dto.featured,
        dto.meta_description,
        dto.keywords,
    ) {
        Ok(command) => command,
        Err(violations) => {
            return ApiResponse::unprocessable("Validation failed", violations.to_details());
        }
    };

    match data.blogs.update.execute(command).await {
        Ok(view) => {
            info!(blog_id = %view.id, user_id = %user.user_id, "Blog post updated");
            ApiResponse::success(view)
        }

        Err(UpdateBlogError::NotFound) => {
            ApiResponse::not_found("BLOG_NOT_FOUND", "Blog post not found")
        }

        Err(UpdateBlogError::SlugTaken) => ApiResponse::unprocessable(
            "Validation failed",
            serde_json::json!({ "slug": "slug is already in use" }),
        ),

        Err(ref e) => {
            error!(error = %e, "Blog update failed");
            ApiResponse::internal_error()
        }
    }
}
