//! LLM client adapter for Parley.
//!
//! Owns prompt assembly, response cleaning, the `TextGenerator` endpoint
//! seam, and the hosted-endpoint HTTP client. The adapter reports failures
//! as tagged errors; user-facing fallback text is chosen by the shell, not
//! here.

pub mod clean;
mod client;
mod error;
mod generator;
mod model;
pub mod prompt;

/// Hosted OpenAI-compatible chat-completions client.
pub use client::NvidiaChatClient;
/// Tagged adapter error.
pub use error::LlmError;
/// Endpoint seam implemented by real and mock clients.
pub use generator::TextGenerator;
/// High-level generate(input, context) entry point.
pub use model::ChatModel;
