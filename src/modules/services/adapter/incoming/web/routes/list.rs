use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::services::application::ports::outgoing::{ServiceListFilter, ServiceSort};
use crate::shared::api::{ApiResponse, Pagination};
use crate::shared::pagination::PageRequest;
use crate::AppState;

#[derive(Deserialize, utoipa::IntoParams)]
pub struct ServiceListQueryDto {
    #[serde(default)]
    pub page: u64,
    #[serde(default)]
    pub per_page: u64,
    pub active: Option<bool>,
    pub search: Option<String>,
    #[serde(default)]
    pub sort: ServiceSort,
}

/// Admin service list in display order.
#[utoipa::path(
    get,
    path = "/api/services",
    tag = "services",
    params(ServiceListQueryDto),
    responses(
        (status = 200, description = "Paginated service list"),
        (status = 401, description = "Missing or invalid token"),
    )
)]
#[get("/api/services")]
pub async fn list_services_handler(
    _user: AuthenticatedUser,
    query: web::Query<ServiceListQueryDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let query = query.into_inner();

    let filter = ServiceListFilter {
        active: query.active,
        search: query.search,
    };
    let page = PageRequest::new(query.page, query.per_page);

    match data.services.list.execute(filter, query.sort, page).await {
        Ok(result) => {
            let pagination = Pagination::new(result.page, result.per_page, result.total);
            ApiResponse::paginated(result.items, pagination)
        }
        Err(e) => {
            error!(error = %e, "Service list failed");
            ApiResponse::internal_error()
        }
    }
}
