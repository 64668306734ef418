use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use object_store::local::LocalFileSystem;
use object_store::path::Path as StorePath;
use object_store::{ObjectStore, PutPayload};
use url::Url;

use crate::application::ports::{ArtifactStore, ArtifactStoreError};
use crate::domain::StoragePath;

/// Filesystem store for local development. URLs are `file://` links and do
/// not expire.
pub struct LocalArtifactStore {
    inner: Arc<LocalFileSystem>,
    base_path: PathBuf,
}

impl LocalArtifactStore {
    pub fn new(base_path: PathBuf) -> Result<Self, ArtifactStoreError> {
        std::fs::create_dir_all(&base_path).map_err(ArtifactStoreError::Io)?;
        let base_path = base_path.canonicalize().map_err(ArtifactStoreError::Io)?;
        let fs = LocalFileSystem::new_with_prefix(&base_path)
            .map_err(|e| ArtifactStoreError::Configuration(e.to_string()))?;
        Ok(Self {
            inner: Arc::new(fs),
            base_path,
        })
    }

    pub fn base_path(&self) -> &std::path::Path {
        &self.base_path
    }
}

#[async_trait::async_trait]
impl ArtifactStore for LocalArtifactStore {
    async fn put(&self, path: &StoragePath, data: Bytes) -> Result<u64, ArtifactStoreError> {
        let size = data.len() as u64;
        let store_path = StorePath::from(path.as_str());
        self.inner
            .put(&store_path, PutPayload::from(data))
            .await
            .map_err(|e| ArtifactStoreError::UploadFailed(e.to_string()))?;
        Ok(size)
    }

    async fn signed_url(
        &self,
        path: &StoragePath,
        _ttl: Duration,
    ) -> Result<String, ArtifactStoreError> {
        let store_path = StorePath::from(path.as_str());
        let file_path = self
            .inner
            .path_to_filesystem(&store_path)
            .map_err(|e| ArtifactStoreError::SigningFailed(e.to_string()))?;

        Url::from_file_path(&file_path)
            .map(|url| url.to_string())
            .map_err(|_| {
                ArtifactStoreError::SigningFailed(format!(
                    "not an absolute path: {}",
                    file_path.display()
                ))
            })
    }
}
