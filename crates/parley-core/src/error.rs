//! Error types for the orchestration core.

use parley_llm::LlmError;
use thiserror::Error;

/// Errors returned by agent and session operations.
///
/// Every variant carries a tag rather than prose; the shell picks the
/// user-facing text through [`crate::fallback::text_for`].
#[derive(Debug, Error)]
pub enum AgentError {
    /// The adapter reported a tagged generation failure.
    #[error("generation failed: {0}")]
    Generate(#[from] LlmError),
    /// Orchestration-side failure outside the adapter boundary.
    #[error("internal error: {0}")]
    Internal(String),
}
