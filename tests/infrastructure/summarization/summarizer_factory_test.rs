use std::sync::Arc;

use sycx::application::ports::LlmClientError;
use sycx::infrastructure::summarization::SummarizerFactory;
use sycx::infrastructure::text_processing::CompositeFileLoader;
use sycx::presentation::config::{SummarizerProvider, SummarizerSettings};

fn settings(provider: SummarizerProvider, api_key: Option<&str>) -> SummarizerSettings {
    SummarizerSettings {
        provider,
        api_key: api_key.map(String::from),
        base_url: None,
        azure_endpoint: None,
        azure_api_version: "2024-06-01".to_string(),
        model: "gpt-4o-mini".to_string(),
        vision_model: None,
        max_tokens: 512,
        temperature: 0.3,
        timeout_seconds: 5,
        max_input_chars: 1000,
    }
}

#[test]
fn given_extractive_provider_when_creating_then_needs_no_credentials() {
    let result = SummarizerFactory::create(
        &settings(SummarizerProvider::Extractive, None),
        Arc::new(CompositeFileLoader::standard(10)),
    );

    assert!(result.is_ok());
}

#[test]
fn given_remote_provider_without_key_when_creating_then_fails_at_startup() {
    let result = SummarizerFactory::create(
        &settings(SummarizerProvider::OpenAi, None),
        Arc::new(CompositeFileLoader::standard(10)),
    );

    assert!(matches!(result, Err(LlmClientError::Configuration(_))));
}

#[test]
fn given_remote_provider_with_key_when_creating_then_succeeds() {
    let result = SummarizerFactory::create(
        &settings(SummarizerProvider::OpenAi, Some("key-from-env")),
        Arc::new(CompositeFileLoader::standard(10)),
    );

    assert!(result.is_ok());
}
