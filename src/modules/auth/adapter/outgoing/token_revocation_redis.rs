use async_trait::async_trait;
use deadpool_redis::Pool;
use deadpool_redis::redis::AsyncCommands;
use sha2::{Digest, Sha256};
use std::sync::Arc;

use crate::modules::auth::application::ports::outgoing::TokenRevocationStore;

/// Redis-backed revocation set. Tokens are stored as SHA-256 digests so the
/// raw credential never sits in redis, with a TTL matching the token's
/// remaining lifetime.
#[derive(Clone)]
pub struct TokenRevocationRedis {
    pool: Arc<Pool>,
}

impl TokenRevocationRedis {
    pub fn new(pool: Arc<Pool>) -> Self {
        Self { pool }
    }

    fn key_for(token: &str) -> String {
        let digest = Sha256::digest(token.as_bytes());
        format!("revoked_token:{:x}", digest)
    }
}

#[async_trait]
impl TokenRevocationStore for TokenRevocationRedis {
    async fn revoke(&self, token: &str, ttl_seconds: u64) -> Result<(), String> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| format!("Redis connection error: {}", e))?;

        let key = Self::key_for(token);
        let _: () = conn
            .set_ex(key, "1", ttl_seconds.max(1))
            .await
            .map_err(|e| format!("Failed to revoke token: {}", e))?;

        Ok(())
    }

    async fn is_revoked(&self, token: &str) -> Result<bool, String> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| format!("Redis connection error: {}", e))?;

        let key = Self::key_for(token);
        let exists: bool = conn
            .exists(key)
            .await
            .map_err(|e| format!("Failed to check token status: {}", e))?;

        Ok(exists)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_is_a_stable_digest_not_the_raw_token() {
        let key_a = TokenRevocationRedis::key_for("my.jwt.token");
        let key_b = TokenRevocationRedis::key_for("my.jwt.token");
        let key_c = TokenRevocationRedis::key_for("other.jwt.token");

        assert_eq!(key_a, key_b);
        assert_ne!(key_a, key_c);
        assert!(key_a.starts_with("revoked_token:"));
        assert!(!key_a.contains("my.jwt.token"));
    }
}
