use config::{Config, ConfigError, File};
use serde::Deserialize;

use super::Environment;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub app: AppSettings,
    pub server: ServerSettings,
    pub rate_limit: RateLimitSettings,
    pub intake: IntakeSettings,
    pub summarizer: SummarizerSettings,
    pub storage: StorageSettings,
    pub rendering: RenderingSettings,
    pub image_search: ImageSearchSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    pub name: String,
    pub version: String,
    pub docs_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub max_upload_mb: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitSettings {
    pub limit: usize,
    pub window_seconds: u64,
    pub eviction_interval_seconds: u64,
    pub trust_forwarded_for: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IntakeSettings {
    pub extra_extensions: Vec<String>,
    pub pdf_max_pages: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummarizerProvider {
    Extractive,
    #[serde(rename = "openai")]
    OpenAi,
    Azure,
    #[serde(rename = "lmstudio")]
    LmStudio,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SummarizerSettings {
    pub provider: SummarizerProvider,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub azure_endpoint: Option<String>,
    pub azure_api_version: String,
    pub model: String,
    pub vision_model: Option<String>,
    pub max_tokens: usize,
    pub temperature: f32,
    pub timeout_seconds: u64,
    pub max_input_chars: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageProvider {
    Local,
    Azure,
    S3,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    pub provider: StorageProvider,
    pub folder: String,
    pub url_ttl_seconds: u64,
    pub local_path: String,
    pub azure_account: Option<String>,
    pub azure_access_key: Option<String>,
    pub azure_container: Option<String>,
    pub s3_bucket: Option<String>,
    pub s3_region: Option<String>,
    pub s3_endpoint: Option<String>,
    pub s3_access_key_id: Option<String>,
    pub s3_secret_access_key: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RenderingSettings {
    pub font_path: Option<String>,
    pub primary_color: String,
    pub header_color: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImageSearchSettings {
    pub unsplash_access_key: Option<String>,
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub json: bool,
}

impl Settings {
    /// Defaults, then `config/appsettings.{environment}.toml` if present, then
    /// `APP_*` environment variables (`__` separates nesting levels, e.g.
    /// `APP_SUMMARIZER__API_KEY`).
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("app.name", "SycX-API")?
            .set_default("app.version", env!("CARGO_PKG_VERSION"))?
            .set_default("app.docs_url", "/api/v1/docs")?
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5000)?
            .set_default("server.max_upload_mb", 25)?
            .set_default("rate_limit.limit", 1000)?
            .set_default("rate_limit.window_seconds", 900)?
            .set_default("rate_limit.eviction_interval_seconds", 60)?
            .set_default("rate_limit.trust_forwarded_for", false)?
            .set_default("intake.extra_extensions", Vec::<String>::new())?
            .set_default("intake.pdf_max_pages", 200)?
            .set_default("summarizer.provider", "extractive")?
            .set_default("summarizer.azure_api_version", "2024-06-01")?
            .set_default("summarizer.model", "gpt-4o-mini")?
            .set_default("summarizer.max_tokens", 2048)?
            .set_default("summarizer.temperature", 0.3)?
            .set_default("summarizer.timeout_seconds", 120)?
            .set_default("summarizer.max_input_chars", 48_000)?
            .set_default("storage.provider", "local")?
            .set_default("storage.folder", "SycX Files")?
            .set_default("storage.url_ttl_seconds", 3600)?
            .set_default("storage.local_path", "data/artifacts")?
            .set_default("rendering.primary_color", "#1F3A5F")?
            .set_default("rendering.header_color", "#2E6DA4")?
            .set_default("image_search.timeout_seconds", 5)?
            .set_default("logging.json", environment == Environment::Prod)?
            .add_source(
                File::with_name(&format!("config/appsettings.{}", environment.as_str()))
                    .required(false),
            )
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("intake.extra_extensions")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}
