use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::jwt_config::JwtConfig;
use crate::modules::auth::application::ports::outgoing::token_provider::{
    TokenClaims, TokenError, TokenProvider,
};

/// Wire shape of the JWT payload.
#[derive(Debug, Serialize, Deserialize)]
struct JwtClaims {
    sub: Uuid,
    username: String,
    role: String,
    iss: String,
    iat: i64,
    exp: i64,
}

pub struct JwtService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtService {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret_key.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret_key.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    /// Decode without expiry enforcement; callers apply their own cutoff.
    fn decode_claims(&self, token: &str) -> Result<JwtClaims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.set_issuer(&[&self.config.issuer]);

        decode::<JwtClaims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| TokenError::Invalid(e.to_string()))
    }
}

impl TokenProvider for JwtService {
    fn generate_token(
        &self,
        user_id: Uuid,
        username: &str,
        role: &str,
    ) -> Result<String, TokenError> {
        let now = Utc::now();
        let expiration = now + Duration::seconds(self.config.token_expiry);
        let claims = JwtClaims {
            sub: user_id,
            username: username.to_string(),
            role: role.to_string(),
            iss: self.config.issuer.clone(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::CreationFailed(e.to_string()))
    }

    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        self.verify_token_within_grace(token, 0)
    }

    fn verify_token_within_grace(
        &self,
        token: &str,
        grace_seconds: i64,
    ) -> Result<TokenClaims, TokenError> {
        let claims = self.decode_claims(token)?;

        let now = Utc::now().timestamp();
        if claims.exp + grace_seconds < now {
            return Err(TokenError::Expired);
        }

        Ok(TokenClaims {
            sub: claims.sub,
            username: claims.username,
            role: claims.role,
            iat: claims.iat,
            exp: claims.exp,
        })
    }

    fn token_lifetime_seconds(&self) -> i64 {
        self.config.token_expiry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(expiry: i64) -> JwtService {
        JwtService::new(JwtConfig {
            secret_key: "test_secret_key_min_32_characters_long".to_string(),
            issuer: "lexfirm".to_string(),
            token_expiry: expiry,
            refresh_grace: 3600,
        })
    }

    #[test]
    fn generate_and_verify_round_trip() {
        let jwt = service(3600);
        let user_id = Uuid::new_v4();

        let token = jwt
            .generate_token(user_id, "admin", "admin")
            .expect("Token should be generated");

        let claims = jwt.verify_token(&token).expect("Token should be valid");
        assert_eq!(claims.sub, user_id);
        assert_eq!(claims.username, "admin");
        assert_eq!(claims.role, "admin");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn garbage_token_is_rejected() {
        let jwt = service(3600);
        let result = jwt.verify_token("invalid.jwt.token");
        assert!(matches!(result, Err(TokenError::Invalid(_))));
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let jwt = service(3600);
        let other = JwtService::new(JwtConfig {
            secret_key: "a_completely_different_secret_key_42".to_string(),
            issuer: "lexfirm".to_string(),
            token_expiry: 3600,
            refresh_grace: 3600,
        });

        let token = other.generate_token(Uuid::new_v4(), "admin", "admin").unwrap();
        assert!(jwt.verify_token(&token).is_err());
    }

    #[test]
    fn expired_token_is_rejected_but_refreshable_within_grace() {
        // Negative expiry backdates the token.
        let jwt = service(-10);
        let token = jwt.generate_token(Uuid::new_v4(), "admin", "admin").unwrap();

        assert!(matches!(jwt.verify_token(&token), Err(TokenError::Expired)));
        assert!(jwt.verify_token_within_grace(&token, 60).is_ok());
        assert!(matches!(
            jwt.verify_token_within_grace(&token, 5),
            Err(TokenError::Expired)
        ));
    }

    #[test]
    fn issuer_mismatch_is_rejected() {
        let jwt = service(3600);
        let other = JwtService::new(JwtConfig {
            secret_key: "test_secret_key_min_32_characters_long".to_string(),
            issuer: "someone-else".to_string(),
            token_expiry: 3600,
            refresh_grace: 3600,
        });

        let token = other.generate_token(Uuid::new_v4(), "admin", "admin").unwrap();
        assert!(matches!(jwt.verify_token(&token), Err(TokenError::Invalid(_))));
    }
}
