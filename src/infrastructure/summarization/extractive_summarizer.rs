use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{FileLoader, Summarizer, SummarizerError};
use crate::domain::{Document, Summary, SummaryDepth, suggest_display_format};

const MAX_TITLE_WORDS: usize = 12;

/// Offline summarizer: keeps the leading sentences of the extracted text up
/// to the depth's word budget. Useful for local runs without model
/// credentials; cannot read images.
pub struct ExtractiveSummarizer {
    file_loader: Arc<dyn FileLoader>,
}

impl ExtractiveSummarizer {
    pub fn new(file_loader: Arc<dyn FileLoader>) -> Self {
        Self { file_loader }
    }
}

#[async_trait]
impl Summarizer for ExtractiveSummarizer {
    #[tracing::instrument(
        skip(self, data),
        fields(filename = %document.filename, depth = %depth)
    )]
    async fn summarize(
        &self,
        data: &[u8],
        document: &Document,
        depth: SummaryDepth,
    ) -> Result<Summary, SummarizerError> {
        if document.content_type.is_image() {
            return Err(SummarizerError::UnsupportedContent(format!(
                "{} requires a vision-capable summarizer",
                document.content_type.as_mime()
            )));
        }

        let text = self.file_loader.extract_text(data, document).await?;
        summarize_text(&text, depth)
    }
}

/// Sentence-level extractive summary of `text`.
pub fn summarize_text(text: &str, depth: SummaryDepth) -> Result<Summary, SummarizerError> {
    let title = leading_title(text);
    let body = match &title {
        Some(t) => text.trim_start().strip_prefix(t.as_str()).unwrap_or(text),
        None => text,
    };

    let sentences = split_sentences(body);
    if sentences.is_empty() {
        return Err(SummarizerError::Empty);
    }

    let source_words = body.split_whitespace().count();
    let (max_words, _) = depth.word_budget(source_words);

    let mut picked = Vec::new();
    let mut words = 0;
    for sentence in &sentences {
        let sentence_words = sentence.split_whitespace().count();
        if !picked.is_empty() && words + sentence_words > max_words {
            break;
        }
        picked.push(*sentence);
        words += sentence_words;
    }

    let summary = picked.join(" ");
    let display_format = suggest_display_format(&summary);
    Ok(Summary::new(summary, title, display_format))
}

/// A short first line without terminal punctuation reads as a heading.
fn leading_title(text: &str) -> Option<String> {
    let first = text.lines().map(str::trim).find(|l| !l.is_empty())?;
    let words = first.split_whitespace().count();
    let looks_like_heading = words <= MAX_TITLE_WORDS
        && !first.ends_with(['.', '!', '?', ':', ';', ','])
        && text.trim() != first;
    looks_like_heading.then(|| first.to_string())
}

/// Splits on `.`, `!` or `?` followed by whitespace or end of text. Line
/// breaks between paragraphs also end a sentence.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, ch)) = chars.next() {
        let next = chars.peek().map(|(_, c)| *c);
        let terminal = matches!(ch, '.' | '!' | '?')
            && next.is_none_or(char::is_whitespace);
        let paragraph_break = ch == '\n' && next == Some('\n');

        if terminal || paragraph_break {
            let end = idx + ch.len_utf8();
            let sentence = text[start..end].trim();
            if !sentence.is_empty() {
                sentences.push(sentence);
            }
            start = end;
        }
    }

    let tail = text[start..].trim();
    if !tail.is_empty() {
        sentences.push(tail);
    }
    sentences
}
