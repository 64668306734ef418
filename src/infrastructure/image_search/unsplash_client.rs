use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::application::ports::ImageSearch;

const DEFAULT_BASE_URL: &str = "https://api.unsplash.com";
const MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024;

/// Random landscape photo for a query from the Unsplash API.
pub struct UnsplashClient {
    client: Client,
    base_url: String,
    access_key: String,
}

#[derive(Deserialize)]
pub struct RandomPhoto {
    pub urls: PhotoUrls,
}

#[derive(Deserialize)]
pub struct PhotoUrls {
    pub regular: String,
}

#[derive(Debug, thiserror::Error)]
pub enum UnsplashError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("unexpected status {0}")]
    Status(reqwest::StatusCode),
    #[error("image too large: {0} bytes")]
    TooLarge(usize),
}

impl UnsplashClient {
    pub fn new(access_key: String, timeout: Duration) -> Result<Self, UnsplashError> {
        Self::with_base_url(access_key, timeout, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(
        access_key: String,
        timeout: Duration,
        base_url: &str,
    ) -> Result<Self, UnsplashError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            access_key,
        })
    }

    async fn fetch(&self, query: &str) -> Result<Vec<u8>, UnsplashError> {
        let response = self
            .client
            .get(format!("{}/photos/random", self.base_url))
            .header("Authorization", format!("Client-ID {}", self.access_key))
            .query(&[("query", query), ("orientation", "landscape")])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(UnsplashError::Status(response.status()));
        }

        let photo: RandomPhoto = response.json().await?;

        let image = self.client.get(&photo.urls.regular).send().await?;
        if !image.status().is_success() {
            return Err(UnsplashError::Status(image.status()));
        }

        let bytes = image.bytes().await?;
        if bytes.len() > MAX_IMAGE_BYTES {
            return Err(UnsplashError::TooLarge(bytes.len()));
        }

        Ok(bytes.to_vec())
    }
}

#[async_trait]
impl ImageSearch for UnsplashClient {
    #[tracing::instrument(skip(self))]
    async fn find_image(&self, query: &str) -> Option<Vec<u8>> {
        match self.fetch(query).await {
            Ok(bytes) => {
                tracing::debug!(size_bytes = bytes.len(), "Header image fetched");
                Some(bytes)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Header image lookup failed");
                None
            }
        }
    }
}
