use async_trait::async_trait;

use crate::modules::newsletter::application::ports::outgoing::{
    SubscriberRepository, SubscriberView,
};
use crate::shared::validation::{required_email, Violations};

// ========================= Unsubscribe Use Case =========================

#[derive(Debug, Clone)]
pub struct UnsubscribeCommand {
    email: String,
}

impl UnsubscribeCommand {
    pub fn new(email: Option<String>) -> Result<Self, Violations> {
        let mut v = Violations::new();
        let email = required_email(&mut v, "email", email);

        if !v.is_empty() {
            return Err(v);
        }

        Ok(Self { email })
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UnsubscribeError {
    #[error("Subscriber not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IUnsubscribeUseCase: Send + Sync {
    async fn execute(
        &self,
        command: UnsubscribeCommand,
    ) -> Result<SubscriberView, UnsubscribeError>;
}

#[derive(Debug, Clone)]
pub struct UnsubscribeUseCase<R>
where
    R: SubscriberRepository + Send + Sync,
{
    repository: R,
}

impl<R> UnsubscribeUseCase<R>
where
    R: SubscriberRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IUnsubscribeUseCase for UnsubscribeUseCase<R>
where
    R: SubscriberRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: UnsubscribeCommand,
    ) -> Result<SubscriberView, UnsubscribeError> {
        let existing = self
            .repository
            .find_by_email(command.email())
            .await
            .map_err(|e| UnsubscribeError::RepositoryError(e.to_string()))?
            .ok_or(UnsubscribeError::NotFound)?;

        self.repository
            .deactivate(existing.id)
            .await
            .map_err(|e| UnsubscribeError::RepositoryError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::newsletter::application::use_cases::subscribe::tests::{
        sample_subscriber, Call, MockSubscriberRepository,
    };

    #[tokio::test]
    async fn unknown_email_is_not_found() {
        let use_case = UnsubscribeUseCase::new(MockSubscriberRepository::with_existing(None));

        let command = UnsubscribeCommand::new(Some("ghost@example.com".to_string())).unwrap();
        let result = use_case.execute(command).await;

        assert!(matches!(result, Err(UnsubscribeError::NotFound)));
    }

    #[tokio::test]
    async fn known_email_is_deactivated() {
        let existing = sample_subscriber("reader@example.com", true);
        let id = existing.id;
        let use_case =
            UnsubscribeUseCase::new(MockSubscriberRepository::with_existing(Some(existing)));

        let command = UnsubscribeCommand::new(Some("reader@example.com".to_string())).unwrap();
        let view = use_case.execute(command).await.unwrap();

        assert!(!view.active);
        assert!(view.unsubscribed_at.is_some());
        let calls = use_case.repository.calls.lock().unwrap();
        assert!(matches!(&calls[..], [Call::Deactivate(seen)] if *seen == id));
    }

    #[tokio::test]
    async fn unsubscribe_is_accepted_even_when_already_inactive() {
        let existing = sample_subscriber("reader@example.com", false);
        let use_case =
            UnsubscribeUseCase::new(MockSubscriberRepository::with_existing(Some(existing)));

        let command = UnsubscribeCommand::new(Some("reader@example.com".to_string())).unwrap();
        let view = use_case.execute(command).await.unwrap();

        assert!(!view.active);
    }
}
