//! Wiring helpers for handler-level tests. The full `AppState` is built on
//! top of a `MockDatabase` connection so routes can be exercised through
//! `actix_web::test::init_service` without postgres or redis running.

use std::sync::Arc;

use deadpool_redis::Runtime;
use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase};

use crate::modules::auth::application::ports::outgoing::TokenProvider;
use crate::modules::auth::application::services::jwt::{JwtConfig, JwtService};
use crate::{build_state, AppState};

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret_key: "handler-test-secret".to_string(),
        issuer: "lexfirm-test".to_string(),
        token_expiry: 3600,
        refresh_grace: 3600,
    }
}

pub fn test_token_provider() -> Arc<dyn TokenProvider + Send + Sync> {
    Arc::new(JwtService::new(test_jwt_config()))
}

// Pool creation is lazy; handlers that never touch redis work against an
// address nothing listens on.
fn test_redis_pool() -> Arc<deadpool_redis::Pool> {
    let pool = deadpool_redis::Config::from_url("redis://127.0.0.1:1")
        .create_pool(Some(Runtime::Tokio1))
        .unwrap();
    Arc::new(pool)
}

/// Full application state over the given mock connection.
pub fn state_with_db(db: DatabaseConnection) -> AppState {
    let jwt_config = test_jwt_config();
    build_state(
        Arc::new(db),
        test_redis_pool(),
        test_token_provider(),
        &jwt_config,
    )
}

/// State whose mock database has no prepared results. Good enough for
/// handlers that fail validation before reaching a port.
pub fn empty_state() -> AppState {
    state_with_db(MockDatabase::new(DatabaseBackend::Postgres).into_connection())
}
