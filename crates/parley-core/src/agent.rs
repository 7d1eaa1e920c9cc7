//! Agent orchestration: route, assemble context, generate, remember.

use crate::error::AgentError;
use crate::route::{ToolKind, route};
use log::{debug, info};
use parley_llm::ChatModel;
use parley_memory::WindowBuffer;
use std::time::{Duration, Instant};

/// Result payload for a single processed turn. Never partially filled.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentResult {
    /// Cleaned assistant response.
    pub response: String,
    /// Tool family the turn was attributed to.
    pub tool: ToolKind,
    /// Sentiment placeholder recorded with the turn.
    pub sentiment: &'static str,
    /// Wall time spent processing the turn.
    pub elapsed: Duration,
}

/// Single public entry point for one conversational turn.
///
/// Owns the memory window; the window is only updated after a successful
/// completion, so failed turns leave no trace in the prompt context.
pub struct Agent {
    model: ChatModel,
    memory: WindowBuffer,
}

impl Agent {
    /// Build an agent over an adapter and a memory window.
    pub fn new(model: ChatModel, memory: WindowBuffer) -> Self {
        Self { model, memory }
    }

    /// Process one user utterance.
    ///
    /// On success the exchange is appended to the memory window. On failure
    /// the tagged error propagates untouched; this layer adds no prose.
    pub async fn process(&mut self, input: &str) -> Result<AgentResult, AgentError> {
        let started = Instant::now();
        let tool = route(input);
        let context = self.memory.context();
        debug!(
            "processing turn (tool={}, context_len={})",
            tool.as_str(),
            context.len()
        );

        let response = self.model.generate(input, &context).await?;
        self.memory.add(input, response.as_str());

        let elapsed = started.elapsed();
        info!(
            "turn complete (tool={}, elapsed_ms={})",
            tool.as_str(),
            elapsed.as_millis()
        );
        Ok(AgentResult {
            response,
            tool,
            sentiment: "neutral",
            elapsed,
        })
    }

    /// Read-only view of the memory window.
    pub fn memory(&self) -> &WindowBuffer {
        &self.memory
    }

    /// Forget every remembered exchange.
    pub fn clear_memory(&mut self) {
        self.memory.clear();
    }
}
