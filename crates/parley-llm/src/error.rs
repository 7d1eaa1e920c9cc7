//! Error types for the LLM adapter.

use thiserror::Error;

/// Tagged failures surfaced by the adapter.
///
/// Nothing here is retried and nothing is fatal; callers map each variant
/// to user-facing text at the outermost layer.
#[derive(Debug, Error)]
pub enum LlmError {
    /// No API key was available when the client was constructed.
    #[error("missing endpoint credentials")]
    MissingCredentials,
    /// The input was blank; detected before any network call.
    #[error("empty input")]
    EmptyInput,
    /// The request never produced a usable HTTP response.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The endpoint answered with a non-success status.
    #[error("endpoint error (status={status}): {message}")]
    Endpoint { status: u16, message: String },
    /// The endpoint answered but the completion was missing or blank.
    #[error("empty completion")]
    EmptyCompletion,
}
