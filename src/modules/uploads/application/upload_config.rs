use std::env;

/// Where uploaded images land on disk and how they are addressed over HTTP.
#[derive(Debug, Clone)]
pub struct UploadConfig {
    pub dir: String,
    pub base_url: String,
}

impl UploadConfig {
    pub fn from_env() -> Self {
        let dir = env::var("UPLOAD_DIR").unwrap_or_else(|_| "./uploads".to_string());
        let base_url = env::var("UPLOAD_BASE_URL").unwrap_or_else(|_| "/uploads".to_string());

        Self { dir, base_url }
    }
}
