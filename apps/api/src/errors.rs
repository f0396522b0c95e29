use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Decode failures never reach this type: they are returned to the caller as `ERROR: ...` text.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Llm(e @ LlmError::Api { .. }) => {
                tracing::error!("LLM backend rejected request: {e}");
                (StatusCode::BAD_GATEWAY, "LLM_REJECTED", e.to_string())
            }
            AppError::Llm(e @ LlmError::Http(_)) => {
                tracing::error!("LLM backend unreachable: {e}");
                (StatusCode::BAD_GATEWAY, "LLM_UNAVAILABLE", e.to_string())
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
