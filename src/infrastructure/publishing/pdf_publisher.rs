use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;

use crate::application::ports::{ArtifactStore, DocumentPublisher, ImageSearch, PublishError};
use crate::domain::{DocumentId, StoragePath, Summary};
use crate::infrastructure::rendering::PdfRenderer;

/// Renders the summary to PDF, uploads it and hands back a time-limited URL.
pub struct PdfPublisher {
    renderer: Arc<PdfRenderer>,
    store: Arc<dyn ArtifactStore>,
    image_search: Option<Arc<dyn ImageSearch>>,
    folder: String,
    url_ttl: Duration,
}

impl PdfPublisher {
    pub fn new(
        renderer: Arc<PdfRenderer>,
        store: Arc<dyn ArtifactStore>,
        folder: impl Into<String>,
        url_ttl: Duration,
    ) -> Self {
        Self {
            renderer,
            store,
            image_search: None,
            folder: folder.into(),
            url_ttl,
        }
    }

    pub fn with_image_search(mut self, image_search: Arc<dyn ImageSearch>) -> Self {
        self.image_search = Some(image_search);
        self
    }

    async fn header_image(&self, summary: &Summary) -> Option<Vec<u8>> {
        let search = self.image_search.as_ref()?;
        let query = summary.display_format.image_query.trim();
        if query.is_empty() {
            return None;
        }
        search.find_image(query).await
    }
}

#[async_trait]
impl DocumentPublisher for PdfPublisher {
    async fn render_and_publish(
        &self,
        document_id: &DocumentId,
        title: &str,
        summary: &Summary,
    ) -> Result<String, PublishError> {
        let image = self.header_image(summary).await;

        let renderer = Arc::clone(&self.renderer);
        let title_owned = title.to_string();
        let summary_owned = summary.clone();
        let pdf = tokio::task::spawn_blocking(move || {
            renderer.render(&title_owned, &summary_owned, image.as_deref())
        })
        .await
        .map_err(|e| PublishError::Render(format!("render task failed: {e}")))?
        .map_err(|e| PublishError::Render(e.to_string()))?;

        let path = StoragePath::for_summary(&self.folder, document_id, title);
        let size = self.store.put(&path, Bytes::from(pdf)).await?;
        tracing::info!(path = %path, size_bytes = size, "Summary PDF uploaded");

        let url = self.store.signed_url(&path, self.url_ttl).await?;
        Ok(url)
    }
}
