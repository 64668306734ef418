mod intake_validator;
mod rate_limiter;
mod summarization_service;

pub use intake_validator::{IntakeValidator, ValidatedUpload, ValidationError};
pub use rate_limiter::SlidingWindowRateLimiter;
pub use summarization_service::{
    SummarizationError, SummarizationService, SummaryOutcome, resolve_title,
};
