use actix_web::{get, http::StatusCode, web, HttpResponse, Responder};
use tracing::error;

use crate::shared::api::ApiResponse;
use crate::AppState;

/// Liveness probe. Always succeeds while the process is up.
#[get("/health")]
pub async fn health_handler() -> impl Responder {
    ApiResponse::success(serde_json::json!({ "status": "ok" }))
}

/// Readiness probe: the process is only ready when both backing stores
/// answer.
#[get("/ready")]
pub async fn ready_handler(data: web::Data<AppState>) -> impl Responder {
    if let Err(e) = data.db.ping().await {
        error!(error = %e, "Readiness check failed against postgres");
        return not_ready("database");
    }

    let mut conn = match data.redis.get().await {
        Ok(conn) => conn,
        Err(e) => {
            error!(error = %e, "Readiness check failed against redis");
            return not_ready("redis");
        }
    };

    let pong: Result<String, deadpool_redis::redis::RedisError> =
        deadpool_redis::redis::cmd("PING").query_async(&mut conn).await;
    if let Err(e) = pong {
        error!(error = %e, "Readiness check failed against redis");
        return not_ready("redis");
    }

    ApiResponse::success(serde_json::json!({ "status": "ready" }))
}

fn not_ready(dependency: &str) -> HttpResponse {
    ApiResponse::error(
        StatusCode::SERVICE_UNAVAILABLE,
        "NOT_READY",
        &format!("{dependency} is not reachable"),
    )
}
