use async_trait::async_trait;

use crate::modules::uploads::application::ports::outgoing::{ImageStore, ImageStoreError};

// ========================= Delete Image Use Case =========================

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteImageError {
    #[error("Image not found")]
    NotFound,

    #[error("Store error: {0}")]
    StoreError(String),
}

#[async_trait]
pub trait IDeleteImageUseCase: Send + Sync {
    async fn execute(&self, filename: &str) -> Result<(), DeleteImageError>;
}

pub struct DeleteImageUseCase<S>
where
    S: ImageStore + Send + Sync,
{
    store: S,
}

impl<S> DeleteImageUseCase<S>
where
    S: ImageStore + Send + Sync,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

/// Only plain filenames reach the store. Anything that could escape the
/// upload directory is treated as nonexistent.
fn is_safe_filename(filename: &str) -> bool {
    !filename.is_empty()
        && !filename.contains('/')
        && !filename.contains('\\')
        && !filename.contains("..")
}

#[async_trait]
impl<S> IDeleteImageUseCase for DeleteImageUseCase<S>
where
    S: ImageStore + Send + Sync,
{
    async fn execute(&self, filename: &str) -> Result<(), DeleteImageError> {
        if !is_safe_filename(filename) {
            return Err(DeleteImageError::NotFound);
        }

        self.store.delete(filename).await.map_err(|e| match e {
            ImageStoreError::NotFound => DeleteImageError::NotFound,
            other => DeleteImageError::StoreError(other.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::uploads::application::use_cases::upload_image::tests::MockImageStore;

    #[tokio::test]
    async fn deletes_plain_filename() {
        let use_case = DeleteImageUseCase::new(MockImageStore::new());

        use_case.execute("1735689600000-ab12cd34.png").await.unwrap();

        let deleted = use_case.store.deleted.lock().unwrap();
        assert_eq!(deleted[..], ["1735689600000-ab12cd34.png".to_string()]);
    }

    #[tokio::test]
    async fn traversal_attempts_are_not_found() {
        let use_case = DeleteImageUseCase::new(MockImageStore::new());

        for name in ["../etc/passwd", "a/b.png", "a\\b.png", "", "..hidden.."] {
            let result = use_case.execute(name).await;
            assert!(matches!(result, Err(DeleteImageError::NotFound)), "{name}");
        }

        assert!(use_case.store.deleted.lock().unwrap().is_empty());
    }

    struct MissingStore;

    #[async_trait]
    impl ImageStore for MissingStore {
        async fn save(&self, _filename: &str, _bytes: &[u8]) -> Result<(), ImageStoreError> {
            unimplemented!()
        }

        async fn delete(&self, _filename: &str) -> Result<(), ImageStoreError> {
            Err(ImageStoreError::NotFound)
        }
    }

    #[tokio::test]
    async fn missing_file_is_not_found() {
        let use_case = DeleteImageUseCase::new(MissingStore);

        let result = use_case.execute("gone.png").await;
        assert!(matches!(result, Err(DeleteImageError::NotFound)));
    }
}
