use std::net::SocketAddr;

use axum::Json;
use axum::extract::{ConnectInfo, Request, State};
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::services::SlidingWindowRateLimiter;
use crate::domain::Admission;
use crate::presentation::state::AppState;

const FORWARDED_FOR: &str = "x-forwarded-for";

#[derive(Serialize)]
pub struct RateLimitResponse {
    pub error: String,
    pub retry_after: u64,
}

/// Admits or rejects the request against the shared sliding-window limiter.
pub async fn rate_limit_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let peer = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| *addr);
    let identity = client_identity(request.headers(), peer, state.trust_forwarded_for);

    match state.rate_limiter.check_and_record(&identity) {
        Admission::Admitted => next.run(request).await,
        Admission::Rejected { retry_after } => {
            let retry_after = retry_after.as_secs_f64().ceil().max(1.0) as u64;
            tracing::warn!(
                identity = %identity,
                retry_after,
                path = %request.uri().path(),
                "Rate limit exceeded"
            );

            let mut response = (
                StatusCode::TOO_MANY_REQUESTS,
                Json(RateLimitResponse {
                    error: "Rate limit exceeded".to_string(),
                    retry_after,
                }),
            )
                .into_response();
            response
                .headers_mut()
                .insert(header::RETRY_AFTER, HeaderValue::from(retry_after));
            response
        }
    }
}

/// Peer IP, or the first forwarded hop when the proxy is trusted.
pub fn client_identity(
    headers: &HeaderMap,
    peer: Option<SocketAddr>,
    trust_forwarded_for: bool,
) -> String {
    if trust_forwarded_for {
        let forwarded = headers
            .get(FORWARDED_FOR)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(',').next())
            .map(str::trim)
            .filter(|v| !v.is_empty());
        if let Some(hop) = forwarded {
            return hop.to_string();
        }
    }

    peer.map(|addr| addr.ip().to_string())
        .unwrap_or_else(|| SlidingWindowRateLimiter::ANONYMOUS.to_string())
}
