use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ImageStoreError {
    #[error("Image not found")]
    NotFound,

    #[error("I/O error: {0}")]
    IoError(String),
}

/// Persistence for uploaded images. The caller owns filename generation
/// and validation; implementations only move bytes.
#[async_trait]
pub trait ImageStore: Send + Sync {
    async fn save(&self, filename: &str, bytes: &[u8]) -> Result<(), ImageStoreError>;

    async fn delete(&self, filename: &str) -> Result<(), ImageStoreError>;
}
