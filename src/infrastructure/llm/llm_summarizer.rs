use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use crate::application::ports::{
    FileLoader, ImageInput, LlmClient, Summarizer, SummarizerError,
};
use crate::domain::{
    DisplayFormat, Document, Summary, SummaryDepth, suggest_display_format,
};
use crate::infrastructure::observability::sanitize_for_log;

const MIN_TARGET_WORDS: usize = 30;

pub const SYSTEM_PROMPT: &str = r#"You summarize study material for students.
Reply with one JSON object and nothing else:
{"title": string, "summary": string, "display_format": object}
display_format has a "type" of "paragraph", "bullet_points" or "sections".
bullet_points adds "points": [string]. sections adds "sections": [{"title": string, "content": string}].
Always include "image_query": a short phrase describing a fitting illustration.
Pick the layout that makes the summary easiest to study."#;

#[derive(Deserialize)]
struct RawSummary {
    #[serde(default)]
    title: Option<String>,
    summary: String,
    #[serde(default)]
    display_format: Option<serde_json::Value>,
}

/// Summarizes through a chat model. Documents are reduced to text first;
/// images go to the model as-is.
pub struct LlmSummarizer {
    file_loader: Arc<dyn FileLoader>,
    llm_client: Arc<dyn LlmClient>,
    max_input_chars: usize,
}

impl LlmSummarizer {
    pub fn new(
        file_loader: Arc<dyn FileLoader>,
        llm_client: Arc<dyn LlmClient>,
        max_input_chars: usize,
    ) -> Self {
        Self {
            file_loader,
            llm_client,
            max_input_chars,
        }
    }

    async fn summarize_text(
        &self,
        data: &[u8],
        document: &Document,
        depth: SummaryDepth,
    ) -> Result<String, SummarizerError> {
        let text = self.file_loader.extract_text(data, document).await?;
        if text.trim().is_empty() {
            return Err(SummarizerError::Empty);
        }

        let source_words = text.split_whitespace().count();
        let (max_words, min_words) = depth.word_budget(source_words);
        let max_words = max_words.max(MIN_TARGET_WORDS);
        let min_words = min_words.min(max_words);

        let text = truncate_chars(&text, self.max_input_chars);
        let prompt = format!(
            "Write a {label} summary of the document \"{file}\" in {min_words} to {max_words} words.\n\n---\n{text}",
            label = depth.label(),
            file = document.filename,
        );

        tracing::debug!(
            source_words,
            min_words,
            max_words,
            "Requesting document summary"
        );

        Ok(self.llm_client.complete(SYSTEM_PROMPT, &prompt).await?)
    }

    async fn summarize_image(
        &self,
        data: &[u8],
        document: &Document,
        depth: SummaryDepth,
    ) -> Result<String, SummarizerError> {
        let prompt = format!(
            "Read all text and content in the image \"{file}\" and write a {label} summary of it.",
            label = depth.label(),
            file = document.filename,
        );

        let image = ImageInput {
            data,
            mime: document.content_type.as_mime(),
        };

        tracing::debug!("Requesting image summary");
        Ok(self
            .llm_client
            .complete_with_image(SYSTEM_PROMPT, &prompt, image)
            .await?)
    }
}

#[async_trait]
impl Summarizer for LlmSummarizer {
    #[tracing::instrument(
        skip(self, data),
        fields(
            document_id = %document.id.as_uuid(),
            filename = %document.filename,
            depth = %depth,
        )
    )]
    async fn summarize(
        &self,
        data: &[u8],
        document: &Document,
        depth: SummaryDepth,
    ) -> Result<Summary, SummarizerError> {
        let reply = if document.content_type.is_image() {
            self.summarize_image(data, document, depth).await?
        } else {
            self.summarize_text(data, document, depth).await?
        };

        tracing::debug!(reply = %sanitize_for_log(&reply), "Model reply received");
        parse_summary_reply(&reply)
    }
}

/// Reads the model's reply. Accepts a bare or fenced JSON object; anything
/// else is taken as the summary text itself. The layout falls back to the
/// heuristic suggestion when missing or unusable.
pub fn parse_summary_reply(reply: &str) -> Result<Summary, SummarizerError> {
    let reply = reply.trim();
    if reply.is_empty() {
        return Err(SummarizerError::Empty);
    }

    let parsed = json_object_span(reply).and_then(|json| serde_json::from_str::<RawSummary>(json).ok());

    let Some(raw) = parsed else {
        tracing::warn!("Model reply was not JSON; using it as plain text");
        let display_format = suggest_display_format(reply);
        return Ok(Summary::new(reply.to_string(), None, display_format));
    };

    let text = raw.summary.trim().to_string();
    if text.is_empty() {
        return Err(SummarizerError::Empty);
    }

    let display_format = raw
        .display_format
        .and_then(|value| serde_json::from_value::<DisplayFormat>(value).ok())
        .filter(DisplayFormat::is_usable)
        .map(DisplayFormat::with_default_image_query)
        .unwrap_or_else(|| suggest_display_format(&text));

    Ok(Summary::new(
        text,
        raw.title.map(|t| t.trim().to_string()),
        display_format,
    ))
}

fn json_object_span(reply: &str) -> Option<&str> {
    let start = reply.find('{')?;
    let end = reply.rfind('}')?;
    (end > start).then(|| &reply[start..=end])
}

fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
