mod error;
mod feedback;
mod health;
mod summarize;

pub use error::{ErrorResponse, error_response};
pub use feedback::{FeedbackResponse, feedback_get_handler, feedback_post_handler};
pub use health::{HealthResponse, IndexResponse, health_handler, index_handler};
pub use summarize::{SummarizeResponse, summarize_handler};
