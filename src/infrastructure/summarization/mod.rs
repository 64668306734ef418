mod extractive_summarizer;
mod summarizer_factory;

pub use extractive_summarizer::{ExtractiveSummarizer, split_sentences, summarize_text};
pub use summarizer_factory::SummarizerFactory;
