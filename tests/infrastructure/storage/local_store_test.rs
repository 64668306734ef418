use std::time::Duration;

use bytes::Bytes;

use sycx::application::ports::ArtifactStore;
use sycx::domain::{DocumentId, StoragePath};
use sycx::infrastructure::storage::LocalArtifactStore;

fn create_test_store() -> (tempfile::TempDir, LocalArtifactStore) {
    let dir = tempfile::TempDir::new().unwrap();
    let store = LocalArtifactStore::new(dir.path().to_path_buf()).unwrap();
    (dir, store)
}

#[tokio::test]
async fn given_bytes_when_putting_then_file_is_persisted_under_base_path() {
    let (_dir, store) = create_test_store();
    let path = StoragePath::for_summary("summaries", &DocumentId::new(), "Cells");

    let size = store.put(&path, Bytes::from_static(b"%PDF-1.3")).await.unwrap();

    assert_eq!(size, 8);
    let on_disk = std::fs::read(store.base_path().join(path.as_str())).unwrap();
    assert_eq!(on_disk, b"%PDF-1.3");
}

#[tokio::test]
async fn given_stored_file_when_signing_then_returns_file_url() {
    let (_dir, store) = create_test_store();
    let path = StoragePath::for_summary("summaries", &DocumentId::new(), "Cells");
    store.put(&path, Bytes::from_static(b"data")).await.unwrap();

    let url = store
        .signed_url(&path, Duration::from_secs(3600))
        .await
        .unwrap();

    assert!(url.starts_with("file://"));
    assert!(url.ends_with("/Cells.pdf"));
}

#[tokio::test]
async fn given_existing_object_when_putting_again_then_content_is_replaced() {
    let (_dir, store) = create_test_store();
    let path = StoragePath::from_raw("summaries/x/report.pdf");

    store.put(&path, Bytes::from_static(b"first")).await.unwrap();
    store.put(&path, Bytes::from_static(b"second")).await.unwrap();

    let on_disk = std::fs::read(store.base_path().join(path.as_str())).unwrap();
    assert_eq!(on_disk, b"second");
}

#[test]
fn given_missing_directory_when_creating_store_then_directory_is_created() {
    let dir = tempfile::TempDir::new().unwrap();
    let nested = dir.path().join("a/b/c");

    let store = LocalArtifactStore::new(nested.clone()).unwrap();

    assert!(nested.is_dir());
    assert!(store.base_path().is_absolute());
}
