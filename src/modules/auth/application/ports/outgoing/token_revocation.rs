use async_trait::async_trait;

/// Revocation set consulted by the token-carrying use cases (me/logout/refresh).
/// Entries expire together with the token they shadow, so the set stays small.
#[async_trait]
pub trait TokenRevocationStore: Send + Sync {
    async fn revoke(&self, token: &str, ttl_seconds: u64) -> Result<(), String>;

    async fn is_revoked(&self, token: &str) -> Result<bool, String>;
}
