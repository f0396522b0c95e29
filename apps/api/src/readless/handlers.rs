//! Axum route handlers for the Readless API.

use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::readless::service::{process_content, OperationRequest};
use crate::state::AppState;

/// POST /api/readless/process
/// POST /api/summarize/process
///
/// Runs the requested operation over `content` and returns the generated text as `text/plain`.
/// Undecodable backend output is still a 200 whose body starts with `ERROR: `.
pub async fn handle_process(
    State(state): State<AppState>,
    Json(request): Json<OperationRequest>,
) -> Result<String, AppError> {
    let text = process_content(state.generator.as_ref(), &request).await?;
    Ok(text)
}
