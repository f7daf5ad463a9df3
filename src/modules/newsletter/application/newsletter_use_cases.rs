use std::sync::Arc;

use crate::modules::newsletter::application::use_cases::list_subscribers::IListSubscribersUseCase;
use crate::modules::newsletter::application::use_cases::subscribe::ISubscribeUseCase;
use crate::modules::newsletter::application::use_cases::unsubscribe::IUnsubscribeUseCase;

/// Wired newsletter use cases as handed to the web layer.
#[derive(Clone)]
pub struct NewsletterUseCases {
    pub subscribe: Arc<dyn ISubscribeUseCase>,
    pub unsubscribe: Arc<dyn IUnsubscribeUseCase>,
    pub list: Arc<dyn IListSubscribersUseCase>,
}
