use async_trait::async_trait;

use crate::modules::newsletter::application::ports::outgoing::{
    SubscriberRepository, SubscriberView,
};
use crate::shared::validation::{required_email, Violations};

// ========================= Subscribe Use Case =========================

#[derive(Debug, Clone)]
pub struct SubscribeCommand {
    email: String,
}

impl SubscribeCommand {
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
pub enum SubscribeError {
    #[error("Email is already subscribed")]
    AlreadySubscribed,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ISubscribeUseCase: Send + Sync {
    async fn execute(&self, command: SubscribeCommand) -> Result<SubscriberView, SubscribeError>;
}

#[derive(Debug, Clone)]
pub struct SubscribeUseCase<R>
where
    R: SubscriberRepository + Send + Sync,
{
    repository: R,
}

impl<R> SubscribeUseCase<R>
where
    R: SubscriberRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ISubscribeUseCase for SubscribeUseCase<R>
where
    R: SubscriberRepository + Send + Sync,
{
    async fn execute(&self, command: SubscribeCommand) -> Result<SubscriberView, SubscribeError> {
        let existing = self
            .repository
            .find_by_email(command.email())
            .await
            .map_err(|e| SubscribeError::RepositoryError(e.to_string()))?;

        match existing {
            Some(row) if row.active => Err(SubscribeError::AlreadySubscribed),

            // Unsubscribed address comes back on the same row.
            Some(row) => self
                .repository
                .reactivate(row.id)
                .await
                .map_err(|e| SubscribeError::RepositoryError(e.to_string())),

            None => self
                .repository
                .insert(command.email())
                .await
                .map_err(|e| SubscribeError::RepositoryError(e.to_string())),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::modules::newsletter::application::ports::outgoing::SubscriberRepositoryError;
    use crate::shared::pagination::{PageRequest, PageResult};
    use chrono::Utc;
    use std::sync::Mutex;
    use uuid::Uuid;

    pub(crate) fn sample_subscriber(email: &str, active: bool) -> SubscriberView {
        SubscriberView {
            id: Uuid::new_v4(),
            email: email.to_string(),
            active,
            subscribed_at: Utc::now(),
            unsubscribed_at: if active { None } else { Some(Utc::now()) },
        }
    }

    pub(crate) enum Call {
        Insert(String),
        Reactivate(Uuid),
        Deactivate(Uuid),
    }

    pub(crate) struct MockSubscriberRepository {
        pub existing: Option<SubscriberView>,
        pub calls: Mutex<Vec<Call>>,
    }

    impl MockSubscriberRepository {
        pub(crate) fn with_existing(existing: Option<SubscriberView>) -> Self {
            Self {
                existing,
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl SubscriberRepository for MockSubscriberRepository {
        async fn find_by_email(
            &self,
            _email: &str,
        ) -> Result<Option<SubscriberView>, SubscriberRepositoryError> {
            Ok(self.existing.clone())
        }

        async fn insert(
            &self,
            email: &str,
        ) -> Result<SubscriberView, SubscriberRepositoryError> {
            self.calls.lock().unwrap().push(Call::Insert(email.to_string()));
            Ok(sample_subscriber(email, true))
        }

        async fn reactivate(
            &self,
            id: Uuid,
        ) -> Result<SubscriberView, SubscriberRepositoryError> {
            self.calls.lock().unwrap().push(Call::Reactivate(id));
            let mut row = self.existing.clone().ok_or(SubscriberRepositoryError::NotFound)?;
            row.active = true;
            row.unsubscribed_at = None;
            Ok(row)
        }

        async fn deactivate(
            &self,
            id: Uuid,
        ) -> Result<SubscriberView, SubscriberRepositoryError> {
            self.calls.lock().unwrap().push(Call::Deactivate(id));
            let mut row = self.existing.clone().ok_or(SubscriberRepositoryError::NotFound)?;
            row.active = false;
            row.unsubscribed_at = Some(Utc::now());
            Ok(row)
        }

        async fn list(
            &self,
            _page: PageRequest,
        ) -> Result<PageResult<SubscriberView>, SubscriberRepositoryError> {
            unimplemented!()
        }
    }

    #[tokio::test]
    async fn new_email_is_inserted() {
        let use_case = SubscribeUseCase::new(MockSubscriberRepository::with_existing(None));

        let command = SubscribeCommand::new(Some("Reader@Example.com".to_string())).unwrap();
        let view = use_case.execute(command).await.unwrap();

        assert!(view.active);
        let calls = use_case.repository.calls.lock().unwrap();
        assert!(matches!(&calls[..], [Call::Insert(email)] if email == "reader@example.com"));
    }

    #[tokio::test]
    async fn active_email_conflicts() {
        let existing = sample_subscriber("reader@example.com", true);
        let use_case =
            SubscribeUseCase::new(MockSubscriberRepository::with_existing(Some(existing)));

        let command = SubscribeCommand::new(Some("reader@example.com".to_string())).unwrap();
        let result = use_case.execute(command).await;

        assert!(matches!(result, Err(SubscribeError::AlreadySubscribed)));
        assert!(use_case.repository.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn inactive_email_is_reactivated() {
        let existing = sample_subscriber("reader@example.com", false);
        let id = existing.id;
        let use_case =
            SubscribeUseCase::new(MockSubscriberRepository::with_existing(Some(existing)));

        let command = SubscribeCommand::new(Some("reader@example.com".to_string())).unwrap();
        let view = use_case.execute(command).await.unwrap();

        assert!(view.active);
        assert!(view.unsubscribed_at.is_none());
        let calls = use_case.repository.calls.lock().unwrap();
        assert!(matches!(&calls[..], [Call::Reactivate(seen)] if *seen == id));
    }

    #[test]
    fn invalid_email_is_rejected() {
        let err = SubscribeCommand::new(Some("not-an-email".to_string())).unwrap_err();
        assert_eq!(err.fields(), vec!["email"]);

        let err = SubscribeCommand::new(None).unwrap_err();
        assert_eq!(err.fields(), vec!["email"]);
    }
}
