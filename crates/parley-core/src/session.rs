//! Explicit per-session context object.
//!
//! Replaces framework-managed global session state: the shell creates one
//! `ChatSession` at session start, threads every turn through it, and drops
//! it at session end. Nothing here outlives the process.

use crate::agent::{Agent, AgentResult};
use crate::analytics::{AnalyticsReport, ConversationAnalytics};
use crate::error::AgentError;
use crate::route::ToolKind;
use crate::types::{SessionId, Turn};
use chrono::{DateTime, Utc};
use log::info;
use std::time::Duration;
use uuid::Uuid;

/// One user session: agent, transcript, and analytics, created together.
pub struct ChatSession {
    /// Session identifier.
    pub id: SessionId,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    agent: Agent,
    transcript: Vec<Turn>,
    analytics: ConversationAnalytics,
}

impl ChatSession {
    /// Start a new session around an agent.
    pub fn new(agent: Agent) -> Self {
        let id = Uuid::new_v4();
        info!("session started (session_id={id})");
        Self {
            id,
            created_at: Utc::now(),
            agent,
            transcript: Vec::new(),
            analytics: ConversationAnalytics::new(),
        }
    }

    /// Run one turn: record the user message, process it, and on success
    /// record the assistant message and the analytics row.
    ///
    /// On failure the tagged error is returned untouched; the shell decides
    /// the user-facing text and completes the bookkeeping through
    /// [`ChatSession::record_fallback`].
    pub async fn submit(&mut self, input: &str) -> Result<AgentResult, AgentError> {
        self.transcript.push(Turn::user(input));
        let result = self.agent.process(input).await?;
        self.transcript.push(Turn::assistant(&result.response));
        self.analytics.track(
            input,
            &result.response,
            result.elapsed,
            result.sentiment,
            result.tool,
        );
        Ok(result)
    }

    /// Complete the bookkeeping for a failed turn after the shell has
    /// substituted fallback text: the transcript and analytics stay
    /// well-formed even when generation fails.
    pub fn record_fallback(&mut self, input: &str, text: &str, tool: ToolKind) {
        self.transcript.push(Turn::assistant(text));
        self.analytics
            .track(input, text, Duration::ZERO, "neutral", tool);
    }

    /// Ordered transcript, oldest first.
    pub fn transcript(&self) -> &[Turn] {
        &self.transcript
    }

    /// Aggregate analytics for the session so far.
    pub fn report(&self) -> AnalyticsReport {
        self.analytics.report()
    }

    /// Clear transcript and memory window, keeping the session id.
    pub fn reset(&mut self) {
        info!("session reset (session_id={})", self.id);
        self.transcript.clear();
        self.agent.clear_memory();
    }

    /// The agent driving this session.
    pub fn agent(&self) -> &Agent {
        &self.agent
    }
}
