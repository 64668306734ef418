use std::path::PathBuf;
use std::sync::Arc;

use crate::application::ports::{ArtifactStore, ArtifactStoreError};
use crate::presentation::config::{StorageProvider, StorageSettings};

use super::local_store::LocalArtifactStore;
use super::object_artifact_store::ObjectArtifactStore;

pub struct ArtifactStoreFactory;

impl ArtifactStoreFactory {
    pub fn create(
        settings: &StorageSettings,
    ) -> Result<Arc<dyn ArtifactStore>, ArtifactStoreError> {
        match settings.provider {
            StorageProvider::Local => {
                let store = LocalArtifactStore::new(PathBuf::from(&settings.local_path))?;
                tracing::info!(path = %store.base_path().display(), "Using local artifact store");
                Ok(Arc::new(store))
            }
            StorageProvider::Azure => {
                let account = required(&settings.azure_account, "azure_account")?;
                let key = required(&settings.azure_access_key, "azure_access_key")?;
                let container = required(&settings.azure_container, "azure_container")?;
                tracing::info!(account, container, "Using Azure Blob artifact store");
                Ok(Arc::new(ObjectArtifactStore::azure(account, key, container)?))
            }
            StorageProvider::S3 => {
                let bucket = required(&settings.s3_bucket, "s3_bucket")?;
                let region = settings.s3_region.as_deref().unwrap_or("us-east-1");
                let credentials = settings
                    .s3_access_key_id
                    .as_deref()
                    .zip(settings.s3_secret_access_key.as_deref());
                tracing::info!(bucket, region, "Using S3 artifact store");
                Ok(Arc::new(ObjectArtifactStore::s3(
                    bucket,
                    region,
                    settings.s3_endpoint.as_deref(),
                    credentials,
                )?))
            }
        }
    }
}

fn required<'a>(value: &'a Option<String>, name: &str) -> Result<&'a str, ArtifactStoreError> {
    value
        .as_deref()
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| ArtifactStoreError::Configuration(format!("{name} required")))
}
