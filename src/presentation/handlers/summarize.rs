use axum::Json;
use axum::extract::multipart::MultipartError;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use bytes::Bytes;
use serde::Serialize;

use crate::application::services::{IntakeValidator, SummarizationError};
use crate::presentation::state::AppState;

use super::error::error_response;

const DEFAULT_USER_ID: &str = "default_user";

#[derive(Serialize)]
pub struct SummarizeResponse {
    pub status: String,
    pub pdf_url: String,
    pub title: String,
    pub summary_length: usize,
    pub user_id: String,
}

#[derive(Default)]
struct SummarizeForm {
    filename: Option<String>,
    data: Option<Bytes>,
    summary_depth: Option<String>,
    user_id: Option<String>,
}

async fn read_form(multipart: &mut Multipart) -> Result<SummarizeForm, MultipartError> {
    let mut form = SummarizeForm::default();

    while let Some(field) = multipart.next_field().await? {
        match field.name() {
            Some("file") => {
                form.filename = field.file_name().map(String::from);
                form.data = Some(field.bytes().await?);
            }
            Some("summary_depth") => form.summary_depth = Some(field.text().await?),
            Some("user_id") => form.user_id = Some(field.text().await?),
            _ => {
                field.bytes().await?;
            }
        }
    }

    Ok(form)
}

#[tracing::instrument(skip(state, multipart))]
pub async fn summarize_handler(State(state): State<AppState>, mut multipart: Multipart) -> Response {
    let form = match read_form(&mut multipart).await {
        Ok(form) => form,
        Err(e) if e.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            tracing::warn!(limit_bytes = state.max_upload_bytes, "Upload exceeds size limit");
            return error_response(
                StatusCode::PAYLOAD_TOO_LARGE,
                format!(
                    "File too large. Maximum upload size is {} MB",
                    state.max_upload_bytes / (1024 * 1024)
                ),
            );
        }
        Err(e) => {
            tracing::warn!(error = %e, "Failed to read multipart body");
            return error_response(
                StatusCode::BAD_REQUEST,
                format!("Failed to read multipart body: {}", e.body_text()),
            );
        }
    };

    let user_id = form
        .user_id
        .as_deref()
        .map(str::trim)
        .filter(|u| !u.is_empty())
        .unwrap_or(DEFAULT_USER_ID)
        .to_string();
    let size_bytes = form.data.as_ref().map_or(0, Bytes::len);
    let content_present = size_bytes > 0;

    let parsed_depth = IntakeValidator::parse_depth(form.summary_depth.as_deref());
    let validated = state
        .intake_validator
        .validate(
            form.filename.as_deref(),
            parsed_depth.clone().ok().flatten(),
            content_present,
        )
        .and_then(|upload| parsed_depth.map(|_| upload));

    let upload = match validated {
        Ok(upload) => upload,
        Err(e) => {
            tracing::warn!(
                user_id = %user_id,
                filename = form.filename.as_deref().unwrap_or_default(),
                size_bytes,
                reason = %e,
                "Upload rejected"
            );
            return error_response(StatusCode::BAD_REQUEST, e.to_string());
        }
    };

    let filename = form.filename.unwrap_or_default();
    let data = form.data.unwrap_or_default();

    tracing::info!(
        user_id = %user_id,
        filename = %filename,
        extension = %upload.extension,
        size_bytes,
        depth = %upload.depth,
        "Summarization requested"
    );

    let outcome = match state
        .summarization_service
        .summarize_and_publish(&data, filename.clone(), upload.content_type, upload.depth)
        .await
    {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::error!(
                user_id = %user_id,
                filename = %filename,
                extension = %upload.extension,
                size_bytes,
                stage = e.stage(),
                error = %e,
                "Summarization request failed"
            );
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, public_message(&e));
        }
    };

    (
        StatusCode::OK,
        Json(SummarizeResponse {
            status: "success".to_string(),
            pdf_url: outcome.pdf_url,
            title: outcome.title,
            summary_length: outcome.summary_length,
            user_id,
        }),
    )
        .into_response()
}

fn public_message(error: &SummarizationError) -> &'static str {
    match error {
        SummarizationError::Summarize(_) | SummarizationError::EmptySummary => {
            "Failed to generate summary"
        }
        SummarizationError::Publish(_) => "Failed to generate PDF",
    }
}
