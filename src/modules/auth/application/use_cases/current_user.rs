use std::sync::Arc;

use async_trait::async_trait;

use crate::modules::auth::application::{
    domain::entities::UserSummary,
    ports::outgoing::{TokenProvider, TokenRevocationStore, UserQuery},
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum CurrentUserError {
    #[error("Invalid or expired token")]
    InvalidToken,

    #[error("Query error: {0}")]
    QueryError(String),

    #[error("Revocation store error: {0}")]
    RevocationStoreError(String),
}

#[async_trait]
pub trait ICurrentUserUseCase: Send + Sync {
    async fn execute(&self, token: &str) -> Result<UserSummary, CurrentUserError>;
}

/// `GET /api/auth/me`: decode the bearer token, reject revoked ones, and
/// return the account as it exists right now (role changes take effect
/// immediately, not at next login).
pub struct CurrentUserUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    query: Q,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
    revocation: Arc<dyn TokenRevocationStore + Send + Sync>,
}

impl<Q> CurrentUserUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(
        query: Q,
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
        revocation: Arc<dyn TokenRevocationStore + Send + Sync>,
    ) -> Self {
        Self {
            query,
            token_provider,
            revocation,
        }
    }
}

#[async_trait]
impl<Q> ICurrentUserUseCase for CurrentUserUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, token: &str) -> Result<UserSummary, CurrentUserError> {
        let claims = self
            .token_provider
            .verify_token(token)
            .map_err(|_| CurrentUserError::InvalidToken)?;

        let revoked = self
            .revocation
            .is_revoked(token)
            .await
            .map_err(CurrentUserError::RevocationStoreError)?;
        if revoked {
            return Err(CurrentUserError::InvalidToken);
        }

        let user = self
            .query
            .find_by_id(claims.sub)
            .await
            .map_err(|e| CurrentUserError::QueryError(e.to_string()))?
            .ok_or(CurrentUserError::InvalidToken)?;

        Ok(UserSummary::from(&user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::application::domain::entities::User;
    use crate::modules::auth::application::ports::outgoing::{
        token_provider::{TokenClaims, TokenError},
        user_query::UserQueryError,
    };
    use chrono::Utc;
    use uuid::Uuid;

    struct StubTokenProvider {
        claims: Option<TokenClaims>,
    }

    impl TokenProvider for StubTokenProvider {
        fn generate_token(
            &self,
            _user_id: Uuid,
            _username: &str,
            _role: &str,
        ) -> Result<String, TokenError> {
            unimplemented!("Not used in current-user tests")
        }

        fn verify_token(&self, _token: &str) -> Result<TokenClaims, TokenError> {
            self.claims
                .clone()
                .ok_or(TokenError::Invalid("bad".to_string()))
        }

        fn verify_token_within_grace(
            &self,
            token: &str,
            _grace_seconds: i64,
        ) -> Result<TokenClaims, TokenError> {
            self.verify_token(token)
        }

        fn token_lifetime_seconds(&self) -> i64 {
            3600
        }
    }

    struct StubRevocation {
        revoked: bool,
    }

    #[async_trait]
    impl TokenRevocationStore for StubRevocation {
        async fn revoke(&self, _token: &str, _ttl_seconds: u64) -> Result<(), String> {
            Ok(())
        }

        async fn is_revoked(&self, _token: &str) -> Result<bool, String> {
            Ok(self.revoked)
        }
    }

    struct StubUserQuery {
        user: Option<User>,
    }

    #[async_trait]
    impl UserQuery for StubUserQuery {
        async fn find_by_username(&self, _username: &str) -> Result<Option<User>, UserQueryError> {
            Ok(None)
        }

        async fn find_by_id(&self, _user_id: Uuid) -> Result<Option<User>, UserQueryError> {
            Ok(self.user.clone())
        }
    }

    fn claims_for(user: &User) -> TokenClaims {
        TokenClaims {
            sub: user.id,
            username: user.username.clone(),
            role: user.role.clone(),
            iat: 0,
            exp: 9_999_999_999,
        }
    }

    fn user() -> User {
        User {
            id: Uuid::new_v4(),
            username: "admin".to_string(),
            password_hash: "hash".to_string(),
            role: "editor".to_string(),
            failed_login_count: 0,
            locked_until: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn returns_fresh_user_summary() {
        let u = user();
        let use_case = CurrentUserUseCase::new(
            StubUserQuery {
                user: Some(u.clone()),
            },
            Arc::new(StubTokenProvider {
                claims: Some(claims_for(&u)),
            }),
            Arc::new(StubRevocation { revoked: false }),
        );

        let summary = use_case.execute("token").await.unwrap();
        assert_eq!(summary.id, u.id);
        assert_eq!(summary.role, "editor");
    }

    #[tokio::test]
    async fn invalid_token_is_rejected() {
        let use_case = CurrentUserUseCase::new(
            StubUserQuery { user: None },
            Arc::new(StubTokenProvider { claims: None }),
            Arc::new(StubRevocation { revoked: false }),
        );

        let result = use_case.execute("garbage").await;
        assert!(matches!(result, Err(CurrentUserError::InvalidToken)));
    }

    #[tokio::test]
    async fn revoked_token_is_rejected() {
        let u = user();
        let use_case = CurrentUserUseCase::new(
            StubUserQuery {
                user: Some(u.clone()),
            },
            Arc::new(StubTokenProvider {
                claims: Some(claims_for(&u)),
            }),
            Arc::new(StubRevocation { revoked: true }),
        );

        let result = use_case.execute("token").await;
        assert!(matches!(result, Err(CurrentUserError::InvalidToken)));
    }

    #[tokio::test]
    async fn deleted_account_reads_as_invalid_token() {
        let u = user();
        let use_case = CurrentUserUseCase::new(
            StubUserQuery { user: None },
            Arc::new(StubTokenProvider {
                claims: Some(claims_for(&u)),
            }),
            Arc::new(StubRevocation { revoked: false }),
        );

        let result = use_case.execute("token").await;
        assert!(matches!(result, Err(CurrentUserError::InvalidToken)));
    }
}
