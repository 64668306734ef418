use std::io;
use std::time::Duration;

use bytes::Bytes;

use crate::domain::StoragePath;

#[async_trait::async_trait]
pub trait ArtifactStore: Send + Sync {
    /// Writes the object, replacing any previous version. Returns the byte count.
    async fn put(&self, path: &StoragePath, data: Bytes) -> Result<u64, ArtifactStoreError>;

    /// A URL granting read access to the object for `ttl`.
    async fn signed_url(
        &self,
        path: &StoragePath,
        ttl: Duration,
    ) -> Result<String, ArtifactStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ArtifactStoreError {
    #[error("upload failed: {0}")]
    UploadFailed(String),
    #[error("signing failed: {0}")]
    SigningFailed(String),
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
