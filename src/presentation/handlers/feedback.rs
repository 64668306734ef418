use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::Utc;
use serde::Serialize;
use serde_json::Value;

#[derive(Serialize)]
pub struct FeedbackResponse {
    pub message: String,
    pub timestamp: String,
}

pub async fn feedback_get_handler() -> impl IntoResponse {
    Json(FeedbackResponse {
        message: "Feedback endpoint is up. POST a JSON body to leave feedback.".to_string(),
        timestamp: Utc::now().to_rfc3339(),
    })
}

#[tracing::instrument(skip(body))]
pub async fn feedback_post_handler(Json(body): Json<Value>) -> impl IntoResponse {
    tracing::info!("Feedback received");

    (
        StatusCode::CREATED,
        Json(FeedbackResponse {
            message: format!("Received: {body}"),
            timestamp: Utc::now().to_rfc3339(),
        }),
    )
}
