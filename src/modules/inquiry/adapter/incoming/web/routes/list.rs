use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::shared::api::{ApiResponse, Pagination};
use crate::shared::pagination::PageRequest;
use crate::AppState;

/// Admin inbox of contact inquiries, newest first.
#[utoipa::path(
    get,
    path = "/api/inquiries",
    tag = "inquiries",
    responses(
        (status = 200, description = "Paginated inquiry list"),
        (status = 401, description = "Missing or invalid token"),
    )
)]
#[get("/api/inquiries")]
pub async fn list_inquiries_handler(
    _user: AuthenticatedUser,
    query: web::Query<PageRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.inquiries.list.execute(query.into_inner()).await {
        Ok(result) => {
            let pagination = Pagination::new(result.page, result.per_page, result.total);
            ApiResponse::paginated(result.items, pagination)
        }
        Err(e) => {
            error!(error = %e, "Inquiry list failed");
            ApiResponse::internal_error()
        }
    }
}
