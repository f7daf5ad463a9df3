use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use serde::Serialize;

use crate::modules::auth::application::ports::outgoing::{TokenProvider, TokenRevocationStore};

#[derive(Debug, Clone, thiserror::Error)]
pub enum RefreshError {
    #[error("Token cannot be refreshed")]
    CannotRefresh,

    #[error("Token creation failed: {0}")]
    TokenCreationFailed(String),

    #[error("Revocation store error: {0}")]
    RevocationStoreError(String),
}

#[derive(Debug, Clone, Serialize)]
pub struct RefreshOutcome {
    pub token: String,
    #[serde(rename = "expiresIn")]
    pub expires_in: i64,
}

#[async_trait]
pub trait IRefreshTokenUseCase: Send + Sync {
    async fn execute(&self, token: &str) -> Result<RefreshOutcome, RefreshError>;
}

/// Exchanges a token for a fresh one. The presented token may already be
/// expired as long as it is inside the configured grace window and was never
/// revoked; it is revoked on exchange so it cannot be replayed.
pub struct RefreshTokenUseCase {
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
    revocation: Arc<dyn TokenRevocationStore + Send + Sync>,
    grace_seconds: i64,
}

impl RefreshTokenUseCase {
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
impl IRefreshTokenUseCase for RefreshTokenUseCase {
    async fn execute(&self, token: &str) -> Result<RefreshOutcome, RefreshError> {
        let claims = self
            .token_provider
            .verify_token_within_grace(token, self.grace_seconds)
            .map_err(|_| RefreshError::CannotRefresh)?;

        let revoked = self
            .revocation
            .is_revoked(token)
            .await
            .map_err(RefreshError::RevocationStoreError)?;
        if revoked {
            return Err(RefreshError::CannotRefresh);
        }

        let new_token = self
            .token_provider
            .generate_token(claims.sub, &claims.username, &claims.role)
            .map_err(|e| RefreshError::TokenCreationFailed(e.to_string()))?;

        // Retire the old token; keep the entry alive through the grace window.
        let remaining = (claims.exp + self.grace_seconds - Utc::now().timestamp()).max(1) as u64;
        self.revocation
            .revoke(token, remaining)
            .await
            .map_err(RefreshError::RevocationStoreError)?;

        Ok(RefreshOutcome {
            token: new_token,
            expires_in: self.token_provider.token_lifetime_seconds(),
        })
    }
}
