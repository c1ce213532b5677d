use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Response body is always `{"error": "<message>"}` — input problems map to
/// 400, everything else to 500 with the underlying message (no stack traces).
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("PDF extraction failed: {0}")]
    Pdf(String),

    #[error("Generation service error: {0}")]
    Llm(String),

    #[error("{0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Pdf(msg) => {
                tracing::error!("PDF error: {msg}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Llm(msg) => {
                tracing::error!("LLM error: {msg}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(json!({ "error": self.to_string() }));

        (status, body).into_response()
    }
}
