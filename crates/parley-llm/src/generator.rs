//! Endpoint seam for text generation.

use crate::error::LlmError;
use async_trait::async_trait;

/// One-shot text generation against a hosted endpoint.
///
/// Implemented by the HTTP client and by test mocks. The prompt is already
/// fully assembled; implementations return the raw completion text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate a completion for an assembled prompt.
    async fn complete(&self, prompt: &str) -> Result<String, LlmError>;
}
