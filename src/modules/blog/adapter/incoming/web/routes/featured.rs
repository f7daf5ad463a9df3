use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, utoipa::IntoParams)]
pub struct FeaturedQueryDto {
    pub limit: Option<u64>,
}

/// Featured and published posts, newest first.
#[utoipa::path(
    get,
    path = "/api/blogs/featured",
    tag = "blogs",
    params(FeaturedQueryDto),
    responses((status = 200, description = "Featured blog posts"))
)]
#[get("/api/blogs/featured")]
pub async fn featured_blogs_handler(
    query: web::Query<FeaturedQueryDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.blogs.featured.execute(query.limit).await {
        Ok(rows) => ApiResponse::success(rows),
        Err(e) => {
            error!(error = %e, "Featured blog fetch failed");
            ApiResponse::internal_error()
        }
    }
}
