use std::sync::Arc;

use sycx::application::ports::{Summarizer, SummarizerError};
use sycx::domain::{ContentType, Document, SummaryDepth};
use sycx::infrastructure::summarization::{ExtractiveSummarizer, split_sentences, summarize_text};
use sycx::infrastructure::text_processing::CompositeFileLoader;

fn numbered_sentences(count: usize) -> String {
    (1..=count)
        .map(|n| format!("Sentence number {n} is here."))
        .collect::<Vec<_>>()
        .join(" ")
}

#[test]
fn given_minimal_depth_when_summarizing_then_keeps_at_least_one_sentence() {
    let text = numbered_sentences(20);

    let summary = summarize_text(&text, SummaryDepth::new(0.0).unwrap()).unwrap();

    assert_eq!(summary.text, "Sentence number 1 is here.");
    assert_eq!(summary.title, None);
}

#[test]
fn given_comprehensive_depth_when_summarizing_then_keeps_leading_sentences_in_budget() {
    let text = numbered_sentences(20);

    let summary = summarize_text(&text, SummaryDepth::new(4.0).unwrap()).unwrap();

    assert_eq!(summary.word_count(), 60);
    assert!(summary.text.starts_with("Sentence number 1 is here."));
    assert!(summary.text.ends_with("Sentence number 12 is here."));
}

#[test]
fn given_heading_line_when_summarizing_then_heading_becomes_title() {
    let text = format!("Cell Biology\n\n{}", numbered_sentences(4));

    let summary = summarize_text(&text, SummaryDepth::default()).unwrap();

    assert_eq!(summary.title.as_deref(), Some("Cell Biology"));
    assert!(!summary.text.contains("Cell Biology"));
}

#[test]
fn given_blank_text_when_summarizing_then_returns_empty() {
    assert!(matches!(
        summarize_text("  \n ", SummaryDepth::default()),
        Err(SummarizerError::Empty)
    ));
}

#[test]
fn given_mixed_terminators_when_splitting_then_splits_on_each() {
    assert_eq!(
        split_sentences("One. Two? Three! Four"),
        vec!["One.", "Two?", "Three!", "Four"]
    );
}

#[test]
fn given_decimal_number_when_splitting_then_does_not_break_inside_it() {
    assert_eq!(
        split_sentences("Pi is 3.14 roughly. Yes."),
        vec!["Pi is 3.14 roughly.", "Yes."]
    );
}

#[tokio::test]
async fn given_image_when_summarizing_extractively_then_returns_unsupported_content() {
    let summarizer = ExtractiveSummarizer::new(Arc::new(CompositeFileLoader::standard(10)));
    let document = Document::new("photo.jpg".to_string(), ContentType::Jpeg, 3);

    let result = summarizer
        .summarize(b"\xFF\xD8\xFF", &document, SummaryDepth::default())
        .await;

    assert!(matches!(result, Err(SummarizerError::UnsupportedContent(_))));
}

#[tokio::test]
async fn given_text_upload_when_summarizing_extractively_then_returns_summary() {
    let summarizer = ExtractiveSummarizer::new(Arc::new(CompositeFileLoader::standard(10)));
    let text = numbered_sentences(10);
    let document = Document::new("notes.txt".to_string(), ContentType::Text, text.len() as u64);

    let summary = summarizer
        .summarize(text.as_bytes(), &document, SummaryDepth::default())
        .await
        .unwrap();

    assert_eq!(summary.word_count(), 15);
}
