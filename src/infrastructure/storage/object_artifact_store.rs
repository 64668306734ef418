use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use object_store::aws::AmazonS3Builder;
use object_store::azure::MicrosoftAzureBuilder;
use object_store::path::Path as StorePath;
use object_store::signer::Signer;
use object_store::{ObjectStore, PutPayload};
use reqwest::Method;

use crate::application::ports::{ArtifactStore, ArtifactStoreError};
use crate::domain::StoragePath;

/// Cloud bucket/container store. Reads are handed out as presigned URLs.
pub struct ObjectArtifactStore {
    inner: Arc<dyn ObjectStore>,
    signer: Arc<dyn Signer>,
}

impl ObjectArtifactStore {
    pub fn from_store<S>(store: S) -> Self
    where
        S: ObjectStore + Signer,
    {
        let store = Arc::new(store);
        Self {
            inner: Arc::clone(&store) as Arc<dyn ObjectStore>,
            signer: store,
        }
    }

    pub fn azure(
        account: &str,
        access_key: &str,
        container: &str,
    ) -> Result<Self, ArtifactStoreError> {
        let store = MicrosoftAzureBuilder::new()
            .with_account(account)
            .with_access_key(access_key)
            .with_container_name(container)
            .build()
            .map_err(|e| ArtifactStoreError::Configuration(e.to_string()))?;

        Ok(Self::from_store(store))
    }

    pub fn s3(
        bucket: &str,
        region: &str,
        endpoint: Option<&str>,
        credentials: Option<(&str, &str)>,
    ) -> Result<Self, ArtifactStoreError> {
        let mut builder = AmazonS3Builder::from_env()
            .with_bucket_name(bucket)
            .with_region(region);

        if let Some(endpoint) = endpoint {
            builder = builder.with_endpoint(endpoint);
        }
        if let Some((key_id, secret)) = credentials {
            builder = builder
                .with_access_key_id(key_id)
                .with_secret_access_key(secret);
        }

        let store = builder
            .build()
            .map_err(|e| ArtifactStoreError::Configuration(e.to_string()))?;

        Ok(Self::from_store(store))
    }
}

#[async_trait::async_trait]
impl ArtifactStore for ObjectArtifactStore {
    #[tracing::instrument(skip(self, data), fields(path = %path, size_bytes = data.len()))]
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
        ttl: Duration,
    ) -> Result<String, ArtifactStoreError> {
        let store_path = StorePath::from(path.as_str());
        self.signer
            .signed_url(Method::GET, &store_path, ttl)
            .await
            .map(|url| url.to_string())
            .map_err(|e| ArtifactStoreError::SigningFailed(e.to_string()))
    }
}
