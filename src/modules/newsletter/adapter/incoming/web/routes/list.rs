use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::shared::api::{ApiResponse, Pagination};
use crate::shared::pagination::PageRequest;
use crate::AppState;

/// Admin subscriber list, newest first.
#[utoipa::path(
    get,
    path = "/api/subscribers",
    tag = "subscribers",
    responses(
        (status = 200, description = "Paginated subscriber list"),
        (status = 401, description = "Missing or invalid token"),
    )
)]
#[get("/api/subscribers")]
pub async fn list_subscribers_handler(
    _user: AuthenticatedUser,
    query: web::Query<PageRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.newsletter.list.execute(query.into_inner()).await {
        Ok(result) => {
            let pagination = Pagination::new(result.page, result.per_page, result.total);
            ApiResponse::paginated(result.items, pagination)
        }
        Err(e) => {
            error!(error = %e, "Subscriber list failed");
            ApiResponse::internal_error()
        }
    }
}
