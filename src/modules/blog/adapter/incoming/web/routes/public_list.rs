use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::modules::blog::application::ports::outgoing::{BlogListFilter, BlogSort};
use crate::shared::api::{ApiResponse, Pagination};
use crate::shared::pagination::PageRequest;
use crate::AppState;

#[derive(Deserialize, utoipa::IntoParams)]
pub struct PublicBlogQueryDto {
    #[serde(default)]
    pub page: u64,
    #[serde(default)]
    pub per_page: u64,
    pub category: Option<String>,
    pub search: Option<String>,
    #[serde(default)]
    pub sort: BlogSort,
}

/// Public blog list. Only published posts are visible; the `published`
/// filter is not accepted here.
#[utoipa::path(
    get,
    path = "/api/public/blogs",
    tag = "public",
    params(PublicBlogQueryDto),
    responses((status = 200, description = "Paginated published posts"))
)]
#[get("/api/public/blogs")]
pub async fn public_blogs_handler(
    query: web::Query<PublicBlogQueryDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let query = query.into_inner();

    let filter = BlogListFilter {
        published: Some(true),
        featured: None,
        category: query.category,
        search: query.search,
    };
    let page = PageRequest::new(query.page, query.per_page);

    match data.blogs.list.execute(filter, query.sort, page).await {
        Ok(result) => {
            let pagination = Pagination::new(result.page, result.per_page, result.total);
            ApiResponse::paginated(result.items, pagination)
        }
        Err(e) => {
            error!(error = %e, "Public blog list failed");
            ApiResponse::internal_error()
        }
    }
}
