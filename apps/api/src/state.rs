use std::sync::Arc;

use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Generation backend. `GeminiClient` in production; swapped for a stub in tests.
    pub generator: Arc<dyn TextGenerator>,
}
