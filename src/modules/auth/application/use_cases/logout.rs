use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::modules::auth::application::ports::outgoing::{TokenProvider, TokenRevocationStore};

#[derive(Debug, Clone, thiserror::Error)]
pub enum LogoutError {
    #[error("Logout failed: {0}")]
    Failed(String),
}

#[async_trait]
pub trait ILogoutUseCase: Send + Sync {
    async fn execute(&self, token: &str) -> Result<(), LogoutError>;
}

/// Revokes the presented token. An expired token can still be exchanged by
/// refresh while it is inside the grace window, so logout must decode with
/// the same grace and keep the revocation entry alive through it. Only a
/// token beyond grace is a no-op success: nothing accepts it anymore.
pub struct LogoutUseCase {
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
    revocation: Arc<dyn TokenRevocationStore + Send + Sync>,
    grace_seconds: i64,
}

impl LogoutUseCase {
    pub fn new(
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
        revocation: Arc<dyn TokenRevocationStore + Send + Sync>,
        grace_seconds: i64,
    ) -> Self {
        Self {
            token_provider,
            revocation,
            grace_seconds,
        }
    }
}

#[async_trait]
impl ILogoutUseCase for LogoutUseCase {
    async fn execute(&self, token: &str) -> Result<(), LogoutError> {
        let claims = match self
            .token_provider
            .verify_token_within_grace(token, self.grace_seconds)
        {
            Ok(claims) => claims,
            Err(_) => return Ok(()),
        };

        let remaining =
            (claims.exp + self.grace_seconds - Utc::now().timestamp()).max(1) as u64;

        self.revocation
            .revoke(token, remaining)
            .await
            .map_err(LogoutError::Failed)
    }
}
