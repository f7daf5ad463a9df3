use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use serde::Serialize;

use crate::modules::auth::application::{
    domain::entities::UserSummary,
    ports::outgoing::{PasswordHasher, TokenProvider, UserQuery, UserRepository},
    services::LockoutPolicy,
};
use crate::shared::validation::{required_text, Violations};

// ========================= Login Command =========================

/// Validated login input. Construction collects every violated field so the
/// handler can report them all at once.
#[derive(Debug, Clone)]
pub struct LoginCommand {
    username: String,
    password: String,
}

impl LoginCommand {
    pub fn new(username: Option<String>, password: Option<String>) -> Result<Self, Violations> {
        let mut v = Violations::new();

        let username = required_text(&mut v, "username", username, 100);
        // Passwords are secrets, not content: no trimming beyond the empty check.
        let password = match password {
            Some(p) if !p.is_empty() => p,
            _ => {
                v.add("password", "password is required");
                String::new()
            }
        };

        if !v.is_empty() {
            return Err(v);
        }

        Ok(Self { username, password })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

// ========================= Login Error =========================

#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginError {
    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Account is temporarily locked")]
    AccountLocked,

    #[error("Password verification failed: {0}")]
    PasswordVerificationFailed(String),

    #[error("Token creation failed: {0}")]
    TokenCreationFailed(String),

    #[error("Query error: {0}")]
    QueryError(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

// ========================= Login Response =========================

#[derive(Debug, Clone, Serialize)]
pub struct LoginOutcome {
    pub token: String,
    pub user: UserSummary,
    #[serde(rename = "expiresIn")]
    pub expires_in: i64,
}

// ========================= Login Use Case =========================

#[async_trait]
pub trait ILoginUseCase: Send + Sync {
    async fn execute(&self, command: LoginCommand) -> Result<LoginOutcome, LoginError>;
}

pub struct LoginUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    query: Q,
    repository: R,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
    policy: LockoutPolicy,
}

impl<Q, R> LoginUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    pub fn new(
        query: Q,
        repository: R,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
        policy: LockoutPolicy,
    ) -> Self {
        Self {
            query,
            repository,
            password_hasher,
            token_provider,
            policy,
        }
    }
}

#[async_trait]
impl<Q, R> ILoginUseCase for LoginUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, command: LoginCommand) -> Result<LoginOutcome, LoginError> {
        let user = self
            .query
            .find_by_username(command.username())
            .await
            .map_err(|e| LoginError::QueryError(e.to_string()))?
            .ok_or(LoginError::InvalidCredentials)?;

        // A locked account refuses the attempt before any password check.
        let now = Utc::now();
        if user.is_locked(now) {
            return Err(LoginError::AccountLocked);
        }

        let is_valid = self
            .password_hasher
            .verify_password(command.password(), &user.password_hash)
            .await
            .map_err(|e| LoginError::PasswordVerificationFailed(e.to_string()))?;

        if !is_valid {
            let count = self
                .repository
                .record_failed_attempt(user.id)
                .await
                .map_err(|e| LoginError::RepositoryError(e.to_string()))?;

            if self.policy.is_exhausted(count) {
                self.repository
                    .lock_account(user.id, self.policy.lock_until(now))
                    .await
                    .map_err(|e| LoginError::RepositoryError(e.to_string()))?;
            }

            return Err(LoginError::InvalidCredentials);
        }

        self.repository
            .reset_lockout(user.id)
            .await
            .map_err(|e| LoginError::RepositoryError(e.to_string()))?;

        let token = self
            .token_provider
            .generate_token(user.id, &user.username, &user.role)
            .map_err(|e| LoginError::TokenCreationFailed(e.to_string()))?;

        Ok(LoginOutcome {
            token,
            user: UserSummary::from(&user),
            expires_in: self.token_provider.token_lifetime_seconds(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::application::domain::entities::User;
    use crate::modules::auth::application::ports::outgoing::{
        password_hasher::HashError, token_provider::TokenClaims, token_provider::TokenError,
        user_query::UserQueryError, user_repository::UserRepositoryError,
    };
    use chrono::{DateTime, Duration, Utc};
    use std::sync::Mutex;
    use uuid::Uuid;

    // ==================== Command validation ====================

    #[test]
    fn command_requires_both_fields() {
        let result = LoginCommand::new(None, None);
        let v = result.unwrap_err();
        assert_eq!(v.fields(), vec!["username", "password"]);
    }

    #[test]
    fn command_rejects_empty_password_only() {
        let result = LoginCommand::new(Some("admin".to_string()), Some(String::new()));
        let v = result.unwrap_err();
        assert_eq!(v.fields(), vec!["password"]);
    }

    #[test]
    fn command_trims_username_but_not_password() {
        let cmd = LoginCommand::new(Some("  admin ".to_string()), Some(" p4ss ".to_string()))
            .unwrap();
        assert_eq!(cmd.username(), "admin");
        assert_eq!(cmd.password(), " p4ss ");
    }

    // ==================== Mocks ====================

    struct MockUserQuery {
        user: Option<User>,
        should_fail: bool,
    }

    #[async_trait]
    impl UserQuery for MockUserQuery {
        async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserQueryError> {
            if self.should_fail {
                return Err(UserQueryError::DatabaseError("boom".to_string()));
            }
            Ok(self
                .user
                .clone()
                .filter(|u| u.username == username))
        }

        async fn find_by_id(&self, _user_id: Uuid) -> Result<Option<User>, UserQueryError> {
            Ok(None)
        }
    }

    /// Records lockout bookkeeping calls so tests can assert the sequence.
    #[derive(Default)]
    struct SpyUserRepository {
        failed_count: Mutex<i32>,
        locked_until: Mutex<Option<DateTime<Utc>>>,
        resets: Mutex<u32>,
    }

    #[async_trait]
    impl UserRepository for SpyUserRepository {
        async fn record_failed_attempt(&self, _user_id: Uuid) -> Result<i32, UserRepositoryError> {
            let mut count = self.failed_count.lock().unwrap();
            *count += 1;
            Ok(*count)
        }

        async fn lock_account(
            &self,
            _user_id: Uuid,
            until: DateTime<Utc>,
        ) -> Result<(), UserRepositoryError> {
            *self.locked_until.lock().unwrap() = Some(until);
            Ok(())
        }

        async fn reset_lockout(&self, _user_id: Uuid) -> Result<(), UserRepositoryError> {
            *self.resets.lock().unwrap() += 1;
            *self.failed_count.lock().unwrap() = 0;
            *self.locked_until.lock().unwrap() = None;
            Ok(())
        }
    }

    struct MockPasswordHasher {
        accept: &'static str,
    }

    #[async_trait]
    impl PasswordHasher for MockPasswordHasher {
        async fn hash_password(&self, _password: &str) -> Result<String, HashError> {
            Ok("hashed".to_string())
        }

        async fn verify_password(&self, password: &str, _hash: &str) -> Result<bool, HashError> {
            Ok(password == self.accept)
        }
    }

    struct MockTokenProvider {
        fail: bool,
    }

    impl TokenProvider for MockTokenProvider {
        fn generate_token(
            &self,
            user_id: Uuid,
            username: &str,
            role: &str,
        ) -> Result<String, TokenError> {
            if self.fail {
                return Err(TokenError::CreationFailed("no key".to_string()));
            }
            Ok(format!("token-{user_id}-{username}-{role}"))
        }

        fn verify_token(&self, _token: &str) -> Result<TokenClaims, TokenError> {
            unimplemented!("Not used in login tests")
        }

        fn verify_token_within_grace(
            &self,
            _token: &str,
            _grace_seconds: i64,
        ) -> Result<TokenClaims, TokenError> {
            unimplemented!("Not used in login tests")
        }

        fn token_lifetime_seconds(&self) -> i64 {
            3600
        }
    }

    fn test_user(locked_until: Option<DateTime<Utc>>) -> User {
        User {
            id: Uuid::new_v4(),
            username: "admin".to_string(),
            password_hash: "hashed".to_string(),
            role: "admin".to_string(),
            failed_login_count: 0,
            locked_until,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn policy() -> LockoutPolicy {
        LockoutPolicy {
            max_attempts: 5,
            lockout_seconds: 900,
        }
    }

    fn command(password: &str) -> LoginCommand {
        LoginCommand::new(Some("admin".to_string()), Some(password.to_string())).unwrap()
    }

    // ==================== Use case ====================

    #[tokio::test]
    async fn login_success_resets_lockout_and_returns_token() {
        let user = test_user(None);
        let use_case = LoginUseCase::new(
            MockUserQuery {
                user: Some(user.clone()),
                should_fail: false,
            },
            SpyUserRepository::default(),
            Arc::new(MockPasswordHasher { accept: "correct" }),
            Arc::new(MockTokenProvider { fail: false }),
            policy(),
        );

        let outcome = use_case.execute(command("correct")).await.unwrap();
        assert!(outcome.token.starts_with("token-"));
        assert_eq!(outcome.user.username, "admin");
        assert_eq!(outcome.user.role, "admin");
        assert_eq!(outcome.expires_in, 3600);
        assert_eq!(*use_case.repository.resets.lock().unwrap(), 1);
    }

    #[tokio::test]
    async fn unknown_user_is_invalid_credentials() {
        let use_case = LoginUseCase::new(
            MockUserQuery {
                user: None,
                should_fail: false,
            },
            SpyUserRepository::default(),
            Arc::new(MockPasswordHasher { accept: "correct" }),
            Arc::new(MockTokenProvider { fail: false }),
            policy(),
        );

        let result = use_case.execute(command("anything")).await;
        assert!(matches!(result, Err(LoginError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn wrong_password_increments_counter() {
        let use_case = LoginUseCase::new(
            MockUserQuery {
                user: Some(test_user(None)),
                should_fail: false,
            },
            SpyUserRepository::default(),
            Arc::new(MockPasswordHasher { accept: "correct" }),
            Arc::new(MockTokenProvider { fail: false }),
            policy(),
        );

        let result = use_case.execute(command("wrong")).await;
        assert!(matches!(result, Err(LoginError::InvalidCredentials)));
        assert_eq!(*use_case.repository.failed_count.lock().unwrap(), 1);
        assert!(use_case.repository.locked_until.lock().unwrap().is_none());
    }

    #[tokio::test]
    async fn fifth_consecutive_failure_locks_the_account() {
        let use_case = LoginUseCase::new(
            MockUserQuery {
                user: Some(test_user(None)),
                should_fail: false,
            },
            SpyUserRepository::default(),
            Arc::new(MockPasswordHasher { accept: "correct" }),
            Arc::new(MockTokenProvider { fail: false }),
            policy(),
        );

        for _ in 0..4 {
            let _ = use_case.execute(command("wrong")).await;
            assert!(use_case.repository.locked_until.lock().unwrap().is_none());
        }

        let _ = use_case.execute(command("wrong")).await;
        assert!(use_case.repository.locked_until.lock().unwrap().is_some());
    }

    #[tokio::test]
    async fn locked_account_rejects_even_the_correct_password() {
        let locked = test_user(Some(Utc::now() + Duration::minutes(10)));
        let use_case = LoginUseCase::new(
            MockUserQuery {
                user: Some(locked),
                should_fail: false,
            },
            SpyUserRepository::default(),
            Arc::new(MockPasswordHasher { accept: "correct" }),
            Arc::new(MockTokenProvider { fail: false }),
            policy(),
        );

        let result = use_case.execute(command("correct")).await;
        assert!(matches!(result, Err(LoginError::AccountLocked)));
        // Password was never checked, so no counter churn either.
        assert_eq!(*use_case.repository.failed_count.lock().unwrap(), 0);
    }

    #[tokio::test]
    async fn elapsed_lock_allows_login_again() {
        let previously_locked = test_user(Some(Utc::now() - Duration::seconds(1)));
        let use_case = LoginUseCase::new(
            MockUserQuery {
                user: Some(previously_locked),
                should_fail: false,
            },
            SpyUserRepository::default(),
            Arc::new(MockPasswordHasher { accept: "correct" }),
            Arc::new(MockTokenProvider { fail: false }),
            policy(),
        );

        assert!(use_case.execute(command("correct")).await.is_ok());
    }

    #[tokio::test]
    async fn token_failure_is_reported_distinctly() {
        let use_case = LoginUseCase::new(
            MockUserQuery {
                user: Some(test_user(None)),
                should_fail: false,
            },
            SpyUserRepository::default(),
            Arc::new(MockPasswordHasher { accept: "correct" }),
            Arc::new(MockTokenProvider { fail: true }),
            policy(),
        );

        let result = use_case.execute(command("correct")).await;
        assert!(matches!(result, Err(LoginError::TokenCreationFailed(_))));
    }

    #[tokio::test]
    async fn query_error_is_propagated() {
        let use_case = LoginUseCase::new(
            MockUserQuery {
                user: None,
                should_fail: true,
            },
            SpyUserRepository::default(),
            Arc::new(MockPasswordHasher { accept: "correct" }),
            Arc::new(MockTokenProvider { fail: false }),
            policy(),
        );

        let result = use_case.execute(command("correct")).await;
        assert!(matches!(result, Err(LoginError::QueryError(_))));
    }
}
