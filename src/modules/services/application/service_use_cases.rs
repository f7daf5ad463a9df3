use std::sync::Arc;

use crate::modules::services::application::use_cases::active_services::IActiveServicesUseCase;
use crate::modules::services::application::use_cases::create_service::ICreateServiceUseCase;
use crate::modules::services::application::use_cases::delete_service::IDeleteServiceUseCase;
use crate::modules::services::application::use_cases::get_service::IGetServiceUseCase;
use crate::modules::services::application::use_cases::list_services::IListServicesUseCase;
use crate::modules::services::application::use_cases::read_active_service::IReadActiveServiceUseCase;
use crate::modules::services::application::use_cases::update_service::IUpdateServiceUseCase;

/// Wired service use cases as handed to the web layer.
#[derive(Clone)]
pub struct ServiceUseCases {
    pub list: Arc<dyn IListServicesUseCase>,
    pub create: Arc<dyn ICreateServiceUseCase>,
    pub get: Arc<dyn IGetServiceUseCase>,
    pub update: Arc<dyn IUpdateServiceUseCase>,
    pub delete: Arc<dyn IDeleteServiceUseCase>,
    pub active: Arc<dyn IActiveServicesUseCase>,
    pub read_active: Arc<dyn IReadActiveServiceUseCase>,
}
