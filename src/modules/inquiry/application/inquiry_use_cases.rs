use std::sync::Arc;

use crate::modules::inquiry::application::use_cases::list_inquiries::IListInquiriesUseCase;
use crate::modules::inquiry::application::use_cases::submit_inquiry::ISubmitInquiryUseCase;

/// Wired inquiry use cases as handed to the web layer.
#[derive(Clone)]
pub struct InquiryUseCases {
    pub submit: Arc<dyn ISubmitInquiryUseCase>,
    pub list: Arc<dyn IListInquiriesUseCase>,
}
