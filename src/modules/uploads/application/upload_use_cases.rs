use std::sync::Arc;

use crate::modules::uploads::application::use_cases::delete_image::IDeleteImageUseCase;
use crate::modules::uploads::application::use_cases::upload_image::IUploadImageUseCase;

/// Wired upload use cases as handed to the web layer.
#[derive(Clone)]
pub struct UploadUseCases {
    pub upload: Arc<dyn IUploadImageUseCase>,
    pub delete: Arc<dyn IDeleteImageUseCase>,
}
