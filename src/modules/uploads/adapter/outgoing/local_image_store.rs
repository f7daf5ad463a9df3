use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::fs;

use crate::modules::uploads::application::ports::outgoing::{ImageStore, ImageStoreError};

// ============================================================================
// Store Implementation
// ============================================================================

/// Images on the local filesystem under a single flat directory.
#[derive(Clone)]
pub struct LocalImageStore {
    dir: PathBuf,
}

impl LocalImageStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, filename: &str) -> PathBuf {
        self.dir.join(filename)
    }
}

#[async_trait]
impl ImageStore for LocalImageStore {
    async fn save(&self, filename: &str, bytes: &[u8]) -> Result<(), ImageStoreError> {
        fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| ImageStoreError::IoError(e.to_string()))?;

        fs::write(self.path_for(filename), bytes)
            .await
            .map_err(|e| ImageStoreError::IoError(e.to_string()))
    }

    async fn delete(&self, filename: &str) -> Result<(), ImageStoreError> {
        fs::remove_file(self.path_for(filename))
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => ImageStoreError::NotFound,
                _ => ImageStoreError::IoError(e.to_string()),
            })
    }
}

// ============================================================================
// Tests
// ============================================================================
