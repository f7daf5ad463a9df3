use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("User not found")]
    UserNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Lockout bookkeeping on the `users` row. The counter increment must be a
/// single-statement update so concurrent failed logins never lose counts.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Increment `failed_login_count` atomically and return the new value.
    async fn record_failed_attempt(&self, user_id: Uuid) -> Result<i32, UserRepositoryError>;

    async fn lock_account(
        &self,
        user_id: Uuid,
        until: DateTime<Utc>,
    ) -> Result<(), UserRepositoryError>;

    /// Clear the counter and the lock stamp after a successful login.
    async fn reset_lockout(&self, user_id: Uuid) -> Result<(), UserRepositoryError>;
}
