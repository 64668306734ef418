use async_trait::async_trait;

use crate::domain::{DocumentId, Summary};

use super::ArtifactStoreError;

/// Turns a summary into a shareable artifact and returns its URL.
#[async_trait]
pub trait DocumentPublisher: Send + Sync {
    async fn render_and_publish(
        &self,
        document_id: &DocumentId,
        title: &str,
        summary: &Summary,
    ) -> Result<String, PublishError>;
}

#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    #[error("render failed: {0}")]
    Render(String),
    #[error("storage: {0}")]
    Storage(#[from] ArtifactStoreError),
}
