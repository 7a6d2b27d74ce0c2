//! Minimal HTTP client for the OpenAI chat completions API.
//!
//! Only the single call the recommendation pipeline needs: one system
//! message, one user message, one completion back. Errors carry the API's
//! message when the response includes one.

mod client;
mod error;
mod types;

pub use client::OpenAiClient;
pub use error::OpenAiError;
