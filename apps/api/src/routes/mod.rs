pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::readless::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/readless/process", post(handlers::handle_process))
        // Legacy path kept for clients of the first summarizer build
        .route("/api/summarize/process", post(handlers::handle_process))
        .with_state(state)
}
