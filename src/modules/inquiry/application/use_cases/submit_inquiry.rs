use async_trait::async_trait;

use crate::modules::inquiry::application::ports::outgoing::{
    InquiryRepository, InquiryView, NewInquiryData,
};
use crate::shared::validation::{optional_text, required_email, required_text, Violations};

// ========================= Submit Inquiry Use Case =========================

/// Validated contact-form submission. IP address and user agent come from
/// the request itself, never from the body.
#[derive(Debug, Clone)]
pub struct SubmitInquiryCommand {
    name: String,
    email: String,
    phone: Option<String>,
    subject: String,
    message: String,
    ip_address: Option<String>,
    user_agent: Option<String>,
}

impl SubmitInquiryCommand {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: Option<String>,
        email: Option<String>,
        phone: Option<String>,
        subject: Option<String>,
        message: Option<String>,
        ip_address: Option<String>,
        user_agent: Option<String>,
    ) -> Result<Self, Violations> {
        let mut v = Violations::new();

        let name = required_text(&mut v, "name", name, 100);
        let email = required_email(&mut v, "email", email);
        let phone = optional_text(&mut v, "phone", phone, 50);
        let subject = required_text(&mut v, "subject", subject, 255);
        let message = required_text(&mut v, "message", message, 10_000);

        if !v.is_empty() {
            return Err(v);
        }

        Ok(Self {
            name,
            email,
            phone,
            subject,
            message,
            ip_address,
            user_agent,
        })
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SubmitInquiryError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ISubmitInquiryUseCase: Send + Sync {
    async fn execute(&self, command: SubmitInquiryCommand)
        -> Result<InquiryView, SubmitInquiryError>;
}

#[derive(Debug, Clone)]
pub struct SubmitInquiryUseCase<R>
where
    R: InquiryRepository + Send + Sync,
{
    repository: R,
}

impl<R> SubmitInquiryUseCase<R>
where
    R: InquiryRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ISubmitInquiryUseCase for SubmitInquiryUseCase<R>
where
    R: InquiryRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: SubmitInquiryCommand,
    ) -> Result<InquiryView, SubmitInquiryError> {
        let data = NewInquiryData {
            name: command.name,
            email: command.email,
            phone: command.phone,
            subject: command.subject,
            message: command.message,
            ip_address: command.ip_address,
            user_agent: command.user_agent,
        };

        self.repository
            .insert(data)
            .await
            .map_err(|e| SubmitInquiryError::RepositoryError(e.to_string()))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::modules::inquiry::application::ports::outgoing::InquiryRepositoryError;
    use crate::shared::pagination::{PageRequest, PageResult};
    use chrono::Utc;
    use std::sync::Mutex;
    use uuid::Uuid;

    pub(crate) fn sample_view(email: &str) -> InquiryView {
        InquiryView {
            id: Uuid::new_v4(),
            name: "Jane Client".to_string(),
            email: email.to_string(),
            phone: None,
            subject: "Retainer question".to_string(),
            message: "I would like to discuss a retainer.".to_string(),
            ip_address: Some("203.0.113.7".to_string()),
            user_agent: Some("Mozilla/5.0".to_string()),
            created_at: Utc::now(),
        }
    }

    struct MockInquiryRepository {
        seen: Mutex<Option<NewInquiryData>>,
    }

    impl MockInquiryRepository {
        fn new() -> Self {
            Self {
                seen: Mutex::new(None),
            }
        }
    }

    #[async_trait]
    impl InquiryRepository for MockInquiryRepository {
        async fn insert(
            &self,
            data: NewInquiryData,
        ) -> Result<InquiryView, InquiryRepositoryError> {
            let view = InquiryView {
                id: Uuid::new_v4(),
                name: data.name.clone(),
                email: data.email.clone(),
                phone: data.phone.clone(),
                subject: data.subject.clone(),
                message: data.message.clone(),
                ip_address: data.ip_address.clone(),
                user_agent: data.user_agent.clone(),
                created_at: Utc::now(),
            };
            *self.seen.lock().unwrap() = Some(data);
            Ok(view)
        }

        async fn list(
            &self,
            _page: PageRequest,
        ) -> Result<PageResult<InquiryView>, InquiryRepositoryError> {
            unimplemented!()
        }
    }

    #[tokio::test]
    async fn valid_submission_is_stored() {
        let use_case = SubmitInquiryUseCase::new(MockInquiryRepository::new());

        let command = SubmitInquiryCommand::new(
            Some("Jane Client".to_string()),
            Some("Jane@Example.com".to_string()),
            None,
            Some("Retainer question".to_string()),
            Some("I would like to discuss a retainer.".to_string()),
            Some("203.0.113.7".to_string()),
            Some("Mozilla/5.0".to_string()),
        )
        .unwrap();

        let view = use_case.execute(command).await.unwrap();
        assert_eq!(view.email, "jane@example.com");

        let seen = use_case.repository.seen.lock().unwrap().take().unwrap();
        assert_eq!(seen.ip_address.as_deref(), Some("203.0.113.7"));
        assert_eq!(seen.user_agent.as_deref(), Some("Mozilla/5.0"));
    }

    #[test]
    fn missing_fields_are_all_reported() {
        let err = SubmitInquiryCommand::new(None, None, None, None, None, None, None)
            .unwrap_err();

        assert_eq!(err.fields(), vec!["name", "email", "subject", "message"]);
    }

    #[test]
    fn bad_email_is_rejected() {
        let err = SubmitInquiryCommand::new(
            Some("Jane".to_string()),
            Some("not-an-email".to_string()),
            None,
            Some("Hello".to_string()),
            Some("Hi there".to_string()),
            None,
            None,
        )
        .unwrap_err();

        assert_eq!(err.fields(), vec!["email"]);
    }
}
