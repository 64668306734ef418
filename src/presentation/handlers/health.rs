use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::Utc;
use serde::Serialize;

use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: String,
    pub environment: String,
}

#[derive(Serialize)]
pub struct IndexResponse {
    pub api_name: String,
    pub version: String,
    pub status: String,
    pub docs_url: String,
}

pub async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            version: state.app.version.clone(),
            timestamp: Utc::now().to_rfc3339(),
            environment: state.environment.to_string(),
        }),
    )
}

pub async fn index_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(IndexResponse {
        api_name: state.app.name.clone(),
        version: state.app.version.clone(),
        status: "operational".to_string(),
        docs_url: state.app.docs_url.clone(),
    })
}
