use async_trait::async_trait;

use crate::domain::{Document, Summary, SummaryDepth};

use super::{FileLoaderError, LlmClientError};

#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(
        &self,
        data: &[u8],
        document: &Document,
        depth: SummaryDepth,
    ) -> Result<Summary, SummarizerError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SummarizerError {
    #[error("unsupported content: {0}")]
    UnsupportedContent(String),
    #[error("text extraction: {0}")]
    Extraction(#[from] FileLoaderError),
    #[error("upstream service: {0}")]
    Upstream(#[from] LlmClientError),
    #[error("nothing to summarize")]
    Empty,
}
