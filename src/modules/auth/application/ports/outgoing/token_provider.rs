use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct TokenClaims {
    pub sub: Uuid,
    pub username: String,
    pub role: String,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum TokenError {
    #[error("Token has expired")]
    Expired,

    #[error("Invalid token: {0}")]
    Invalid(String),

    #[error("Token creation failed: {0}")]
    CreationFailed(String),
}

pub trait TokenProvider: Send + Sync {
    fn generate_token(
        &self,
        user_id: Uuid,
        username: &str,
        role: &str,
    ) -> Result<String, TokenError>;

    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError>;

    /// Like [`verify_token`](Self::verify_token) but tolerates expiry within
    /// `grace_seconds` of now. Used by the refresh flow.
    fn verify_token_within_grace(
        &self,
        token: &str,
        grace_seconds: i64,
    ) -> Result<TokenClaims, TokenError>;

    /// Seconds this provider stamps into `exp` for freshly issued tokens.
    fn token_lifetime_seconds(&self) -> i64;
}
