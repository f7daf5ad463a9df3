use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::blog::application::ports::outgoing::{BlogListFilter, BlogSort};
use crate::shared::api::{ApiResponse, Pagination};
use crate::shared::pagination::PageRequest;
use crate::AppState;

#[derive(Deserialize, utoipa::IntoParams)]
pub struct BlogListQueryDto {
    #[serde(default)]
    pub page: u64,
    #[serde(default)]
    pub per_page: u64,
    pub published: Option<bool>,
    pub featured: Option<bool>,
    pub category: Option<String>,
    pub search: Option<String>,
    #[serde(default)]
    pub sort: BlogSort,
}

/// Admin blog list with filtering, search, sort and pagination.
#[utoipa::path(
    get,
    path = "/api/blogs",
    tag = "blogs",
    params(BlogListQueryDto),
    responses(
        (status = 200, description = "Paginated blog list"),
        (status = 401, description = "Missing or invalid token"),
    )
)]
#[get("/api/blogs")]
pub async fn list_blogs_handler(
    _user: AuthenticatedUser,
    query: web::Query<BlogListQueryDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let query = query.into_inner();

    let filter = BlogListFilter {
        published: query.published,
        featured: query.featured,
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
            error!(error = %e, "Blog list failed");
            ApiResponse::internal_error()
        }
    }
}
