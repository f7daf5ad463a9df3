use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info};

use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::blog::application::use_cases::create_blog::{CreateBlogCommand, CreateBlogError};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, utoipa::ToSchema)]
pub struct CreateBlogRequestDto {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub date: Option<String>,
    pub author: Option<String>,
    pub read_time: Option<String>,
    pub category: Option<String>,
    pub published: Option<bool>,
    pub featured: Option<bool>,
    pub meta_description: Option<String>,
    pub keywords: Option<String>,
}

/// Create a blog post.
#[utoipa::path(
    post,
    path = "/api/blogs",
    tag = "blogs",
    request_body = CreateBlogRequestDto,
    responses(
        (status = 201, description = "Blog post created"),
        (status = 401, description = "Missing or invalid token"),
        (status = 422, description = "Validation failed or slug already in use"),
    )
)]
#[post("/api/blogs")]
pub async fn create_blog_handler(
    user: AuthenticatedUser,
    req: web::Json<CreateBlogRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let command = match CreateBlogCommand::new(
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

    match data.blogs.create.execute(command).await {
        Ok(view) => {
            info!(blog_id = %view.id, user_id = %user.user_id, "Blog post created");
            ApiResponse::created(view)
        }

        // A taken slug is a field violation like any other.
        Err(CreateBlogError::SlugTaken) => ApiResponse::unprocessable(
            "Validation failed",
            serde_json::json!({ "slug": "slug is already in use" }),
        ),

        Err(ref e) => {
            error!(error = %e, "Blog creation failed");
            ApiResponse::internal_error()
        }
    }
}
