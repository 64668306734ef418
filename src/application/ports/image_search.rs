use async_trait::async_trait;

/// Finds an illustrative image for a free-text query. Lookups are best effort:
/// any failure is reported as "no image".
#[async_trait]
pub trait ImageSearch: Send + Sync {
    async fn find_image(&self, query: &str) -> Option<Vec<u8>>;
}
