use std::sync::Arc;

use crate::modules::team::application::use_cases::active_members::IActiveMembersUseCase;
use crate::modules::team::application::use_cases::create_member::ICreateMemberUseCase;
use crate::modules::team::application::use_cases::delete_member::IDeleteMemberUseCase;
use crate::modules::team::application::use_cases::get_member::IGetMemberUseCase;
use crate::modules::team::application::use_cases::list_members::IListMembersUseCase;
use crate::modules::team::application::use_cases::update_member::IUpdateMemberUseCase;

/// Wired team use cases as handed to the web layer.
#[derive(Clone)]
pub struct TeamUseCases {
    pub list: Arc<dyn IListMembersUseCase>,
    pub create: Arc<dyn ICreateMemberUseCase>,
    pub get: Arc<dyn IGetMemberUseCase>,
    pub update: Arc<dyn IUpdateMemberUseCase>,
    pub delete: Arc<dyn IDeleteMemberUseCase>,
    pub active: Arc<dyn IActiveMembersUseCase>,
}
