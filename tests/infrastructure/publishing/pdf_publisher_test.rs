use std::sync::{Arc, Mutex};
use std::time::Duration;

use sycx::application::ports::{DocumentPublisher, ImageSearch};
use sycx::domain::{DisplayFormat, DocumentId, Summary};
use sycx::infrastructure::publishing::PdfPublisher;
use sycx::infrastructure::rendering::PdfRenderer;
use sycx::infrastructure::storage::LocalArtifactStore;
use sycx::presentation::config::RenderingSettings;

#[derive(Default)]
struct RecordingImageSearch {
    queries: Mutex<Vec<String>>,
}

#[async_trait::async_trait]
impl ImageSearch for RecordingImageSearch {
    async fn find_image(&self, query: &str) -> Option<Vec<u8>> {
        self.queries.lock().unwrap().push(query.to_string());
        None
    }
}

fn renderer() -> Arc<PdfRenderer> {
    Arc::new(PdfRenderer::new(&RenderingSettings {
        font_path: None,
        primary_color: "#1F3A5F".to_string(),
        header_color: "#2E6DA4".to_string(),
    }))
}

fn summary() -> Summary {
    Summary::new(
        "Cells are the basic unit of life.".to_string(),
        None,
        DisplayFormat::paragraph(),
    )
}

#[tokio::test]
async fn given_summary_when_publishing_then_pdf_is_stored_and_url_returned() {
    let dir = tempfile::TempDir::new().unwrap();
    let store = Arc::new(LocalArtifactStore::new(dir.path().to_path_buf()).unwrap());
    let publisher = PdfPublisher::new(
        renderer(),
        store.clone(),
        "SycX Files",
        Duration::from_secs(3600),
    );
    let id = DocumentId::new();

    let url = publisher
        .render_and_publish(&id, "Cell Biology", &summary())
        .await
        .unwrap();

    assert!(url.starts_with("file://"));
    assert!(url.ends_with("/Cell_Biology.pdf"));
    let stored = std::fs::read(
        store
            .base_path()
            .join("SycX Files")
            .join(id.as_uuid().to_string())
            .join("Cell_Biology.pdf"),
    )
    .unwrap();
    assert!(stored.starts_with(b"%PDF"));
}

#[tokio::test]
async fn given_image_search_when_publishing_then_queries_with_layout_image_query() {
    let dir = tempfile::TempDir::new().unwrap();
    let store = Arc::new(LocalArtifactStore::new(dir.path().to_path_buf()).unwrap());
    let search = Arc::new(RecordingImageSearch::default());
    let publisher = PdfPublisher::new(renderer(), store, "out", Duration::from_secs(60))
        .with_image_search(search.clone());

    publisher
        .render_and_publish(&DocumentId::new(), "Cells", &summary())
        .await
        .unwrap();

    assert_eq!(*search.queries.lock().unwrap(), vec!["education learning"]);
}
