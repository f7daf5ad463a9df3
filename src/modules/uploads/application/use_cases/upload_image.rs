use async_trait::async_trait;
use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;

use crate::modules::uploads::application::ports::outgoing::ImageStore;
use crate::modules::uploads::application::upload_config::UploadConfig;
use crate::shared::validation::Violations;

// ========================= Upload Image Use Case =========================

pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

const ALLOWED_MIME_TYPES: [&str; 4] = ["image/jpeg", "image/png", "image/webp", "image/gif"];

/// Validated image payload. Size and content type are checked again here
/// even though the web layer enforces the cap while streaming.
#[derive(Debug, Clone)]
pub struct UploadImageCommand {
    original_filename: Option<String>,
    mime_type: String,
    bytes: Vec<u8>,
}

impl UploadImageCommand {
    pub fn new(
        original_filename: Option<String>,
        mime_type: Option<String>,
        bytes: Vec<u8>,
    ) -> Result<Self, Violations> {
        let mut v = Violations::new();

        // Parameters such as "; charset=..." are not part of the essence.
        let mime_type = mime_type
            .as_deref()
            .and_then(|m| m.split(';').next())
            .map(|m| m.trim().to_lowercase())
            .unwrap_or_default();

        if !ALLOWED_MIME_TYPES.contains(&mime_type.as_str()) {
            v.add("file", "file must be a JPEG, PNG, WebP or GIF image");
        }

        if bytes.is_empty() {
            v.add("file", "file is required");
        } else if bytes.len() > MAX_UPLOAD_BYTES {
            v.add("file", "file must be at most 10 MB");
        }

        if !v.is_empty() {
            return Err(v);
        }

        Ok(Self {
            original_filename,
            mime_type,
            bytes,
        })
    }

    /// Stored filename: millisecond timestamp plus a short random suffix so
    /// two uploads in the same millisecond never collide.
    fn stored_filename(&self) -> String {
        let suffix: String = Uuid::new_v4().simple().to_string()[..8].to_string();
        format!(
            "{}-{}.{}",
            Utc::now().timestamp_millis(),
            suffix,
            self.extension()
        )
    }

    fn extension(&self) -> String {
        let from_name = self
            .original_filename
            .as_deref()
            .and_then(|name| name.rsplit('.').next())
            .map(|ext| ext.to_lowercase())
            .filter(|ext| {
                !ext.is_empty() && ext.len() <= 8 && ext.chars().all(|c| c.is_ascii_alphanumeric())
            });

        from_name.unwrap_or_else(|| {
            match self.mime_type.as_str() {
                "image/jpeg" => "jpg",
                "image/png" => "png",
                "image/webp" => "webp",
                _ => "gif",
            }
            .to_string()
        })
    }
}

/// What the client gets back after a successful upload.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct UploadedImage {
    pub filename: String,
    pub path: String,
    pub url: String,
    pub size: u64,
    pub mime_type: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UploadImageError {
    #[error("Store error: {0}")]
    StoreError(String),
}

#[async_trait]
pub trait IUploadImageUseCase: Send + Sync {
    async fn execute(&self, command: UploadImageCommand)
        -> Result<UploadedImage, UploadImageError>;
}

pub struct UploadImageUseCase<S>
where
    S: ImageStore + Send + Sync,
{
    store: S,
    config: UploadConfig,
}

impl<S> UploadImageUseCase<S>
where
    S: ImageStore + Send + Sync,
{
    pub fn new(store: S, config: UploadConfig) -> Self {
        Self { store, config }
    }
}

#[async_trait]
impl<S> IUploadImageUseCase for UploadImageUseCase<S>
where
    S: ImageStore + Send + Sync,
{
    async fn execute(
        &self,
        command: UploadImageCommand,
    ) -> Result<UploadedImage, UploadImageError> {
        let filename = command.stored_filename();

        self.store
            .save(&filename, &command.bytes)
            .await
            .map_err(|e| UploadImageError::StoreError(e.to_string()))?;

        Ok(UploadedImage {
            path: format!("{}/{}", self.config.dir.trim_end_matches('/'), filename),
            url: format!("{}/{}", self.config.base_url.trim_end_matches('/'), filename),
            size: command.bytes.len() as u64,
            mime_type: command.mime_type,
            filename,
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::modules::uploads::application::ports::outgoing::ImageStoreError;
    use std::sync::Mutex;

    pub(crate) struct MockImageStore {
        pub saved: Mutex<Vec<(String, usize)>>,
        pub deleted: Mutex<Vec<String>>,
    }

    impl MockImageStore {
        pub(crate) fn new() -> Self {
            Self {
                saved: Mutex::new(Vec::new()),
                deleted: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl ImageStore for MockImageStore {
        async fn save(&self, filename: &str, bytes: &[u8]) -> Result<(), ImageStoreError> {
            self.saved
                .lock()
                .unwrap()
                .push((filename.to_string(), bytes.len()));
            Ok(())
        }

        async fn delete(&self, filename: &str) -> Result<(), ImageStoreError> {
            self.deleted.lock().unwrap().push(filename.to_string());
            Ok(())
        }
    }

    fn test_config() -> UploadConfig {
        UploadConfig {
            dir: "./uploads".to_string(),
            base_url: "/uploads".to_string(),
        }
    }

    #[tokio::test]
    async fn upload_stores_under_generated_name() {
        let use_case = UploadImageUseCase::new(MockImageStore::new(), test_config());

        let command = UploadImageCommand::new(
            Some("portrait.PNG".to_string()),
            Some("image/png".to_string()),
            vec![0u8; 128],
        )
        .unwrap();

        let view = use_case.execute(command).await.unwrap();

        assert!(view.filename.ends_with(".png"));
        assert_eq!(view.size, 128);
        assert_eq!(view.mime_type, "image/png");
        assert_eq!(view.url, format!("/uploads/{}", view.filename));
        assert_eq!(view.path, format!("./uploads/{}", view.filename));

        let saved = use_case.store.saved.lock().unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].0, view.filename);
    }

    #[test]
    fn extension_falls_back_to_mime_type() {
        let command = UploadImageCommand::new(
            Some("no-extension".to_string()),
            Some("image/webp".to_string()),
            vec![0u8; 16],
        )
        .unwrap();

        assert!(command.stored_filename().ends_with(".webp"));
    }

    #[test]
    fn suspicious_extension_is_not_trusted() {
        let command = UploadImageCommand::new(
            Some("evil.php/../x".to_string()),
            Some("image/jpeg".to_string()),
            vec![0u8; 16],
        )
        .unwrap();

        assert!(command.stored_filename().ends_with(".jpg"));
    }

    #[test]
    fn rejects_disallowed_mime_type() {
        let err = UploadImageCommand::new(
            Some("script.svg".to_string()),
            Some("image/svg+xml".to_string()),
            vec![0u8; 16],
        )
        .unwrap_err();

        assert_eq!(err.fields(), vec!["file"]);
    }

    #[test]
    fn rejects_oversized_payload() {
        let err = UploadImageCommand::new(
            Some("big.jpg".to_string()),
            Some("image/jpeg".to_string()),
            vec![0u8; MAX_UPLOAD_BYTES + 1],
        )
        .unwrap_err();

        assert_eq!(err.fields(), vec!["file"]);
    }

    #[test]
    fn mime_parameters_are_ignored() {
        let command = UploadImageCommand::new(
            None,
            Some("image/png; charset=binary".to_string()),
            vec![0u8; 16],
        )
        .unwrap();

        assert!(command.stored_filename().ends_with(".png"));
    }
}
