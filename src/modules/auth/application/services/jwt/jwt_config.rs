use std::env;

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    pub token_expiry: i64,  // Expiration in seconds
    pub refresh_grace: i64, // Seconds past expiry a token may still be refreshed
}

impl JwtConfig {
    /// Load JWT configuration from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let secret_key = env::var("JWT_SECRET").expect("JWT_SECRET must be set");
        let token_expiry = env::var("JWT_EXPIRY")
            .unwrap_or_else(|_| "3600".to_string()) // Default 1 hour
            .parse::<i64>()
            .expect("Invalid JWT_EXPIRY value");

        let refresh_grace = env::var("AUTH_REFRESH_GRACE_SECONDS")
            .unwrap_or_else(|_| "3600".to_string()) // Default 1 hour
            .parse::<i64>()
            .expect("Invalid AUTH_REFRESH_GRACE_SECONDS value");

        Self {
            secret_key,
            issuer: String::from("lexfirm"),
            token_expiry,
            refresh_grace,
        }
    }
}
