//! Mock `TextGenerator` implementations.

use async_trait::async_trait;
use parking_lot::Mutex;
use parley_llm::{LlmError, TextGenerator};
use std::sync::Arc;

/// Generator returning the same completion for every prompt.
#[derive(Debug, Clone)]
pub struct FixedGenerator {
    response: String,
}

impl FixedGenerator {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
        }
    }
}

#[async_trait]
impl TextGenerator for FixedGenerator {
    async fn complete(&self, _prompt: &str) -> Result<String, LlmError> {
        Ok(self.response.clone())
    }
}

/// Generator failing every call with an endpoint error.
#[derive(Debug, Clone)]
pub struct FailingGenerator {
    status: u16,
    message: String,
}

impl FailingGenerator {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

impl Default for FailingGenerator {
    fn default() -> Self {
        Self::new(500, "simulated endpoint failure")
    }
}

#[async_trait]
impl TextGenerator for FailingGenerator {
    async fn complete(&self, _prompt: &str) -> Result<String, LlmError> {
        Err(LlmError::Endpoint {
            status: self.status,
            message: self.message.clone(),
        })
    }
}

/// Generator returning a blank completion, exercising the empty-output path.
#[derive(Debug, Clone, Default)]
pub struct SilentGenerator;

#[async_trait]
impl TextGenerator for SilentGenerator {
    async fn complete(&self, _prompt: &str) -> Result<String, LlmError> {
        Ok(String::new())
    }
}

/// Generator recording every prompt it sees and answering with fixed text.
#[derive(Debug, Clone)]
pub struct RecordingGenerator {
    response: String,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl RecordingGenerator {
    /// Create the generator plus a handle to the recorded prompts.
    pub fn new(response: impl Into<String>) -> (Self, Arc<Mutex<Vec<String>>>) {
        let prompts = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                response: response.into(),
                prompts: prompts.clone(),
            },
            prompts,
        )
    }
}

#[async_trait]
impl TextGenerator for RecordingGenerator {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        self.prompts.lock().push(prompt.to_string());
        Ok(self.response.clone())
    }
}
