// Readless: operation catalog, prompt building and the process pipeline.
// All backend calls go through llm_client — nothing here talks HTTP to Gemini directly.

pub mod handlers;
pub mod operation;
pub mod prompts;
pub mod service;
