//! Process pipeline: operation → prompt → one backend call → extracted text.

use serde::Deserialize;
use tracing::debug;

use crate::llm_client::response::extract_text;
use crate::llm_client::{LlmError, TextGenerator};
use crate::readless::prompts::build_prompt;

/// Inbound request body. Both fields may be omitted or null.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OperationRequest {
    pub operation: Option<String>,
    pub content: Option<String>,
}

impl OperationRequest {
    pub fn content(&self) -> &str {
        self.content.as_deref().unwrap_or_default()
    }
}

/// Runs one request through the catalog, the backend and the decoder.
///
/// Only backend failures are returned as `Err`. Undecodable backend payloads come back
/// as `Ok` with an `ERROR: ...` body.
pub async fn process_content(
    generator: &dyn TextGenerator,
    request: &OperationRequest,
) -> Result<String, LlmError> {
    let prompt = build_prompt(request.operation.as_deref(), request.content());
    let body = generator.generate(&prompt).await?;
    let text = extract_text(&body);

    debug!("Extracted {} bytes of generated text", text.len());
    Ok(text)
}
