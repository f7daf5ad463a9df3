use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::blog::application::ports::outgoing::{BlogListFilter, BlogSort};
use crate::shared::api::{ApiResponse, Pagination};
use crate::shared::pagination::PageRequest;
use crate::AppState;

/// Published posts in one category, newest first.
#[utoipa::path(
    get,
    path = "/api/blogs/category/{category}",
    tag = "blogs",
    responses((status = 200, description = "Published posts in the category"))
)]
#[get("/api/blogs/category/{category}")]
pub async fn blogs_by_category_handler(
    path: web::Path<String>,
    page: web::Query<PageRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let filter = BlogListFilter {
        published: Some(true),
        category: Some(path.into_inner()),
        ..Default::default()
    };

    match data
        .blogs
        .list
        .execute(filter, BlogSort::DateDesc, page.into_inner())
        .await
    {
        Ok(result) => {
            let pagination = Pagination::new(result.page, result.per_page, result.total);
            ApiResponse::paginated(result.items, pagination)
        }
        Err(e) => {
            error!(error = %e, "Category blog list failed");
            ApiResponse::internal_error()
        }
    }
}
