use std::sync::Arc;
use std::sync::Mutex;

use sycx::application::ports::{
    DocumentPublisher, LlmClientError, PublishError, Summarizer, SummarizerError,
};
use sycx::application::services::{SummarizationError, SummarizationService, resolve_title};
use sycx::domain::{
    ContentType, DisplayFormat, Document, DocumentId, Summary, SummaryDepth,
};

struct FixedSummarizer {
    summary: Summary,
}

#[async_trait::async_trait]
impl Summarizer for FixedSummarizer {
    async fn summarize(
        &self,
        _data: &[u8],
        _document: &Document,
        _depth: SummaryDepth,
    ) -> Result<Summary, SummarizerError> {
        Ok(self.summary.clone())
    }
}

struct FailingSummarizer;

#[async_trait::async_trait]
impl Summarizer for FailingSummarizer {
    async fn summarize(
        &self,
        _data: &[u8],
        _document: &Document,
        _depth: SummaryDepth,
    ) -> Result<Summary, SummarizerError> {
        Err(SummarizerError::Upstream(LlmClientError::RateLimited))
    }
}

#[derive(Default)]
struct RecordingPublisher {
    titles: Mutex<Vec<String>>,
}

#[async_trait::async_trait]
impl DocumentPublisher for RecordingPublisher {
    async fn render_and_publish(
        &self,
        document_id: &DocumentId,
        title: &str,
        _summary: &Summary,
    ) -> Result<String, PublishError> {
        self.titles.lock().unwrap().push(title.to_string());
        Ok(format!("https://files.test/{}.pdf", document_id.as_uuid()))
    }
}

struct FailingPublisher;

#[async_trait::async_trait]
impl DocumentPublisher for FailingPublisher {
    async fn render_and_publish(
        &self,
        _document_id: &DocumentId,
        _title: &str,
        _summary: &Summary,
    ) -> Result<String, PublishError> {
        Err(PublishError::Render("font missing".to_string()))
    }
}

fn summary(text: &str, title: Option<&str>) -> Summary {
    Summary::new(
        text.to_string(),
        title.map(String::from),
        DisplayFormat::paragraph(),
    )
}

#[tokio::test]
async fn given_summary_without_title_when_publishing_then_uses_file_stem() {
    let publisher = Arc::new(RecordingPublisher::default());
    let service = SummarizationService::new(
        Arc::new(FixedSummarizer {
            summary: summary("Cells are the unit of life.", None),
        }),
        publisher.clone(),
    );

    let outcome = service
        .summarize_and_publish(
            b"text",
            "lecture-notes.pdf".to_string(),
            ContentType::Pdf,
            SummaryDepth::default(),
        )
        .await
        .unwrap();

    assert_eq!(outcome.title, "lecture-notes");
    assert_eq!(outcome.summary_length, 6);
    assert_eq!(
        outcome.pdf_url,
        format!("https://files.test/{}.pdf", outcome.document_id.as_uuid())
    );
    assert_eq!(*publisher.titles.lock().unwrap(), vec!["lecture-notes"]);
}

#[tokio::test]
async fn given_suggested_title_when_publishing_then_title_is_passed_to_publisher() {
    let publisher = Arc::new(RecordingPublisher::default());
    let service = SummarizationService::new(
        Arc::new(FixedSummarizer {
            summary: summary("Mitosis has four phases.", Some("Mitosis")),
        }),
        publisher.clone(),
    );

    let outcome = service
        .summarize_and_publish(
            b"text",
            "bio.docx".to_string(),
            ContentType::Docx,
            SummaryDepth::default(),
        )
        .await
        .unwrap();

    assert_eq!(outcome.title, "Mitosis");
    assert_eq!(*publisher.titles.lock().unwrap(), vec!["Mitosis"]);
}

#[tokio::test]
async fn given_summarizer_failure_when_publishing_then_publisher_is_not_called() {
    let publisher = Arc::new(RecordingPublisher::default());
    let service = SummarizationService::new(Arc::new(FailingSummarizer), publisher.clone());

    let err = service
        .summarize_and_publish(
            b"text",
            "a.txt".to_string(),
            ContentType::Text,
            SummaryDepth::default(),
        )
        .await
        .unwrap_err();

    assert!(matches!(err, SummarizationError::Summarize(_)));
    assert_eq!(err.stage(), "summarization");
    assert!(publisher.titles.lock().unwrap().is_empty());
}

#[tokio::test]
async fn given_blank_summary_when_publishing_then_returns_empty_summary_error() {
    let service = SummarizationService::new(
        Arc::new(FixedSummarizer {
            summary: summary("   ", None),
        }),
        Arc::new(RecordingPublisher::default()),
    );

    let err = service
        .summarize_and_publish(
            b"text",
            "a.txt".to_string(),
            ContentType::Text,
            SummaryDepth::default(),
        )
        .await
        .unwrap_err();

    assert!(matches!(err, SummarizationError::EmptySummary));
}

#[tokio::test]
async fn given_publisher_failure_when_publishing_then_reports_rendering_stage() {
    let service = SummarizationService::new(
        Arc::new(FixedSummarizer {
            summary: summary("Some text.", None),
        }),
        Arc::new(FailingPublisher),
    );

    let err = service
        .summarize_and_publish(
            b"text",
            "a.txt".to_string(),
            ContentType::Text,
            SummaryDepth::default(),
        )
        .await
        .unwrap_err();

    assert!(matches!(err, SummarizationError::Publish(_)));
    assert_eq!(err.stage(), "rendering");
}

#[test]
fn given_no_title_and_no_stem_when_resolving_then_falls_back_to_summary() {
    let document = Document::new(String::new(), ContentType::Text, 0);

    assert_eq!(resolve_title(&summary("x", Some("  ")), &document), "Summary");
}
