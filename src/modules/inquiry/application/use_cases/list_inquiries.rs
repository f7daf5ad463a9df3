use async_trait::async_trait;

use crate::modules::inquiry::application::ports::outgoing::{InquiryRepository, InquiryView};
use crate::shared::pagination::{PageRequest, PageResult};

// ========================= List Inquiries Use Case =========================

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListInquiriesError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait IListInquiriesUseCase: Send + Sync {
    async fn execute(
        &self,
        page: PageRequest,
    ) -> Result<PageResult<InquiryView>, ListInquiriesError>;
}

#[derive(Debug, Clone)]
pub struct ListInquiriesUseCase<R>
where
    R: InquiryRepository + Send + Sync,
{
    repository: R,
}

impl<R> ListInquiriesUseCase<R>
where
    R: InquiryRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IListInquiriesUseCase for ListInquiriesUseCase<R>
where
    R: InquiryRepository + Send + Sync,
{
    async fn execute(
        &self,
        page: PageRequest,
    ) -> Result<PageResult<InquiryView>, ListInquiriesError> {
        self.repository
            .list(page)
            .await
            .map_err(|e| ListInquiriesError::QueryError(e.to_string()))
    }
}
