use chrono::{DateTime, Duration, Utc};
use std::env;

/// Failed-login lockout policy. The threshold and duration are deployment
/// configuration, not code constants.
#[derive(Debug, Clone)]
pub struct LockoutPolicy {
    pub max_attempts: i32,
    pub lockout_seconds: i64,
}

impl LockoutPolicy {
    pub fn from_env() -> Self {
        let max_attempts = env::var("AUTH_MAX_FAILED_ATTEMPTS")
            .unwrap_or_else(|_| "5".to_string())
            .parse::<i32>()
            .expect("Invalid AUTH_MAX_FAILED_ATTEMPTS value");

        let lockout_seconds = env::var("AUTH_LOCKOUT_SECONDS")
            .unwrap_or_else(|_| "900".to_string()) // Default 15 minutes
            .parse::<i64>()
            .expect("Invalid AUTH_LOCKOUT_SECONDS value");

        Self {
            max_attempts,
            lockout_seconds,
        }
    }

    pub fn is_exhausted(&self, failed_count: i32) -> bool {
        failed_count >= self.max_attempts
    }

    pub fn lock_until(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        now + Duration::seconds(self.lockout_seconds)
    }
}
