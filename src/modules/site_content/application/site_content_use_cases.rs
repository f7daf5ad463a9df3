use std::sync::Arc;

use crate::modules::site_content::application::use_cases::about::{
    IGetAboutUseCase, IPutAboutUseCase,
};
use crate::modules::site_content::application::use_cases::contact_settings::{
    IGetContactSettingsUseCase, IPutContactSettingsUseCase,
};

/// Wired singleton-content use cases as handed to the web layer.
#[derive(Clone)]
pub struct SiteContentUseCases {
    pub get_about: Arc<dyn IGetAboutUseCase>,
    pub put_about: Arc<dyn IPutAboutUseCase>,
    pub get_contact: Arc<dyn IGetContactSettingsUseCase>,
    pub put_contact: Arc<dyn IPutContactSettingsUseCase>,
}
