use std::sync::Arc;

use crate::application::ports::{FileLoader, LlmClient, LlmClientError, Summarizer};
use crate::infrastructure::llm::{LlmSummarizer, OpenAiClient};
use crate::presentation::config::{SummarizerProvider, SummarizerSettings};

use super::extractive_summarizer::ExtractiveSummarizer;

pub struct SummarizerFactory;

impl SummarizerFactory {
    pub fn create(
        settings: &SummarizerSettings,
        file_loader: Arc<dyn FileLoader>,
    ) -> Result<Arc<dyn Summarizer>, LlmClientError> {
        match settings.provider {
            SummarizerProvider::Extractive => {
                tracing::info!("Using offline extractive summarizer");
                tracing::warn!(
                    "Image uploads (png, jpg, jpeg) will fail until an LLM provider is configured"
                );
                Ok(Arc::new(ExtractiveSummarizer::new(file_loader)))
            }
            provider => {
                let client: Arc<dyn LlmClient> = Arc::new(OpenAiClient::from_settings(settings)?);
                tracing::info!(
                    provider = ?provider,
                    model = %settings.model,
                    "Using LLM summarizer"
                );
                Ok(Arc::new(LlmSummarizer::new(
                    file_loader,
                    client,
                    settings.max_input_chars,
                )))
            }
        }
    }
}
