mod rate_limit;

pub use rate_limit::{RateLimitResponse, client_identity, rate_limit_middleware};
