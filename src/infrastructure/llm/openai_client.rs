use std::time::Duration;

use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{ImageInput, LlmClient, LlmClientError};
use crate::presentation::config::{SummarizerProvider, SummarizerSettings};

/// Chat-completions client for OpenAI, Azure OpenAI and LM Studio.
pub struct OpenAiClient {
    client: Client,
    provider: SummarizerProvider,
    endpoint: String,
    vision_endpoint: String,
    api_key: String,
    model: String,
    vision_model: String,
    max_tokens: usize,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    model: Option<&'a str>,
    messages: Vec<ChatMessage>,
    max_tokens: usize,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage {
    role: &'static str,
    content: MessageContent,
}

#[derive(Serialize)]
#[serde(untagged)]
enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentPart {
    Text { text: String },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Serialize)]
struct ImageUrl {
    url: String,
}

#[derive(Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
pub struct ChatChoice {
    pub message: ResponseMessage,
}

#[derive(Deserialize)]
pub struct ResponseMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl OpenAiClient {
    pub fn from_settings(settings: &SummarizerSettings) -> Result<Self, LlmClientError> {
        let api_key = settings
            .api_key
            .clone()
            .filter(|k| !k.trim().is_empty());

        let base_url = match settings.provider {
            SummarizerProvider::OpenAi => settings
                .base_url
                .clone()
                .unwrap_or_else(|| "https://api.openai.com/v1".to_string()),
            SummarizerProvider::LmStudio => settings.base_url.clone().ok_or_else(|| {
                LlmClientError::Configuration("base_url required for lmstudio provider".into())
            })?,
            SummarizerProvider::Azure => settings
                .azure_endpoint
                .clone()
                .ok_or_else(|| {
                    LlmClientError::Configuration(
                        "azure_endpoint required for azure provider".into(),
                    )
                })?,
            SummarizerProvider::Extractive => {
                return Err(LlmClientError::Configuration(
                    "extractive provider does not use a remote model".into(),
                ));
            }
        };
        let base_url = base_url.trim_end_matches('/').to_string();

        let api_key = match (settings.provider, api_key) {
            (_, Some(key)) => key,
            (SummarizerProvider::LmStudio, None) => "lm-studio".to_string(),
            (_, None) => {
                return Err(LlmClientError::Configuration(
                    "api_key is required; set APP_SUMMARIZER__API_KEY".into(),
                ));
            }
        };

        let vision_model = settings
            .vision_model
            .clone()
            .unwrap_or_else(|| settings.model.clone());

        let endpoint_for = |model: &str| match settings.provider {
            SummarizerProvider::Azure => format!(
                "{}/openai/deployments/{}/chat/completions?api-version={}",
                base_url, model, settings.azure_api_version
            ),
            _ => format!("{}/chat/completions", base_url),
        };

        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_seconds))
            .build()
            .map_err(|e| LlmClientError::Configuration(e.to_string()))?;

        Ok(Self {
            client,
            provider: settings.provider,
            endpoint: endpoint_for(&settings.model),
            vision_endpoint: endpoint_for(&vision_model),
            api_key,
            model: settings.model.clone(),
            vision_model,
            max_tokens: settings.max_tokens,
            temperature: settings.temperature,
        })
    }

    fn apply_auth(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        if self.provider == SummarizerProvider::Azure {
            request.header("api-key", &self.api_key)
        } else {
            request.header("Authorization", format!("Bearer {}", self.api_key))
        }
    }

    async fn send(
        &self,
        endpoint: &str,
        model: &str,
        messages: Vec<ChatMessage>,
    ) -> Result<String, LlmClientError> {
        // Azure routes by deployment in the URL; the body must not name a model.
        let model = (self.provider != SummarizerProvider::Azure).then_some(model);
        let request_body = ChatCompletionRequest {
            model,
            messages,
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        let request = self.client.post(endpoint).json(&request_body);
        let response = self
            .apply_auth(request)
            .send()
            .await
            .map_err(|e| LlmClientError::ApiRequestFailed(e.to_string()))?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(LlmClientError::RateLimited);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(LlmClientError::ApiRequestFailed(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| LlmClientError::InvalidResponse(e.to_string()))?;

        first_choice_content(completion)
    }
}

pub fn first_choice_content(completion: ChatCompletionResponse) -> Result<String, LlmClientError> {
    completion
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| LlmClientError::InvalidResponse("empty choices".to_string()))
}

#[async_trait]
impl LlmClient for OpenAiClient {
    async fn complete(&self, system: &str, user: &str) -> Result<String, LlmClientError> {
        let messages = vec![
            ChatMessage {
                role: "system",
                content: MessageContent::Text(system.to_string()),
            },
            ChatMessage {
                role: "user",
                content: MessageContent::Text(user.to_string()),
            },
        ];
        self.send(&self.endpoint, &self.model, messages).await
    }

    async fn complete_with_image(
        &self,
        system: &str,
        user: &str,
        image: ImageInput<'_>,
    ) -> Result<String, LlmClientError> {
        let b64 = general_purpose::STANDARD.encode(image.data);
        let data_uri = format!("data:{};base64,{b64}", image.mime);

        let messages = vec![
            ChatMessage {
                role: "system",
                content: MessageContent::Text(system.to_string()),
            },
            ChatMessage {
                role: "user",
                content: MessageContent::Parts(vec![
                    ContentPart::ImageUrl {
                        image_url: ImageUrl { url: data_uri },
                    },
                    ContentPart::Text {
                        text: user.to_string(),
                    },
                ]),
            },
        ];
        self.send(&self.vision_endpoint, &self.vision_model, messages)
            .await
    }
}
