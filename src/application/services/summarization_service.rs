use std::sync::Arc;

use crate::application::ports::{DocumentPublisher, PublishError, Summarizer, SummarizerError};
use crate::domain::{ContentType, Document, DocumentId, Summary, SummaryDepth};

const FALLBACK_TITLE: &str = "Summary";

/// Result of a successful summarize-and-publish run.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryOutcome {
    pub document_id: DocumentId,
    pub pdf_url: String,
    pub title: String,
    pub summary_length: usize,
}

pub struct SummarizationService {
    summarizer: Arc<dyn Summarizer>,
    publisher: Arc<dyn DocumentPublisher>,
}

impl SummarizationService {
    pub fn new(summarizer: Arc<dyn Summarizer>, publisher: Arc<dyn DocumentPublisher>) -> Self {
        Self {
            summarizer,
            publisher,
        }
    }

    #[tracing::instrument(
        skip(self, data),
        fields(size_bytes = data.len(), content_type = content_type.as_mime())
    )]
    pub async fn summarize_and_publish(
        &self,
        data: &[u8],
        filename: String,
        content_type: ContentType,
        depth: SummaryDepth,
    ) -> Result<SummaryOutcome, SummarizationError> {
        let document = Document::new(filename, content_type, data.len() as u64);

        let summary = self
            .summarizer
            .summarize(data, &document, depth)
            .await
            .map_err(SummarizationError::Summarize)?;

        if summary.is_empty() {
            return Err(SummarizationError::EmptySummary);
        }

        let title = resolve_title(&summary, &document);
        let summary_length = summary.word_count();

        tracing::debug!(
            document_id = %document.id.as_uuid(),
            layout = summary.display_format.layout.as_str(),
            summary_length,
            "Summary generated"
        );

        let pdf_url = self
            .publisher
            .render_and_publish(&document.id, &title, &summary)
            .await
            .map_err(SummarizationError::Publish)?;

        tracing::info!(
            document_id = %document.id.as_uuid(),
            title = %title,
            "Summary published"
        );

        Ok(SummaryOutcome {
            document_id: document.id,
            pdf_url,
            title,
            summary_length,
        })
    }
}

/// The summarizer's title when it suggested one, otherwise the file stem.
pub fn resolve_title(summary: &Summary, document: &Document) -> String {
    summary
        .title
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .or_else(|| document.stem())
        .unwrap_or(FALLBACK_TITLE)
        .to_string()
}

#[derive(Debug, thiserror::Error)]
pub enum SummarizationError {
    #[error("summarization: {0}")]
    Summarize(#[source] SummarizerError),
    #[error("summarization returned an empty result")]
    EmptySummary,
    #[error("publishing: {0}")]
    Publish(#[source] PublishError),
}

impl SummarizationError {
    /// Which pipeline stage failed.
    pub fn stage(&self) -> &'static str {
        match self {
            SummarizationError::Summarize(_) | SummarizationError::EmptySummary => {
                "summarization"
            }
            SummarizationError::Publish(_) => "rendering",
        }
    }
}
