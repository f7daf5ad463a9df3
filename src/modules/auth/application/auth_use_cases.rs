use std::sync::Arc;

use crate::modules::auth::application::use_cases::{
    current_user::ICurrentUserUseCase, login::ILoginUseCase, logout::ILogoutUseCase,
    refresh::IRefreshTokenUseCase,
};

#[derive(Clone)]
pub struct AuthUseCases {
    pub login: Arc<dyn ILoginUseCase + Send + Sync>,
    pub current_user: Arc<dyn ICurrentUserUseCase + Send + Sync>,
    pub logout: Arc<dyn ILogoutUseCase + Send + Sync>,
    pub refresh: Arc<dyn IRefreshTokenUseCase + Send + Sync>,
}
