use std::time::Duration;

use sycx::application::ports::ImageSearch;
use sycx::infrastructure::image_search::UnsplashClient;

#[tokio::test]
async fn given_unreachable_api_when_searching_then_returns_no_image() {
    let client = UnsplashClient::with_base_url(
        "access-key-from-env".to_string(),
        Duration::from_millis(500),
        "http://127.0.0.1:9",
    )
    .unwrap();

    assert!(client.find_image("education learning").await.is_none());
}
