mod artifact_store;
mod document_publisher;
mod file_loader;
mod image_search;
mod llm_client;
mod summarizer;

pub use artifact_store::{ArtifactStore, ArtifactStoreError};
pub use document_publisher::{DocumentPublisher, PublishError};
pub use file_loader::{FileLoader, FileLoaderError};
pub use image_search::ImageSearch;
pub use llm_client::{ImageInput, LlmClient, LlmClientError};
pub use summarizer::{Summarizer, SummarizerError};
