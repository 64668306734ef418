use std::sync::Arc;

use crate::application::services::{IntakeValidator, SlidingWindowRateLimiter, SummarizationService};
use crate::presentation::config::{AppSettings, Environment};

#[derive(Clone)]
pub struct AppState {
    pub summarization_service: Arc<SummarizationService>,
    pub rate_limiter: Arc<SlidingWindowRateLimiter>,
    pub intake_validator: Arc<IntakeValidator>,
    pub app: AppSettings,
    pub environment: Environment,
    pub max_upload_bytes: usize,
    /// Use the first `X-Forwarded-For` hop as the client identity.
    pub trust_forwarded_for: bool,
}
