//! Per-turn analytics recorder and aggregate reporting.

use crate::route::ToolKind;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use std::time::Duration;

/// One recorded conversation turn.
#[derive(Debug, Clone, Serialize)]
pub struct ConversationRecord {
    /// When the turn was recorded.
    pub timestamp: DateTime<Utc>,
    /// User input for the turn.
    pub input: String,
    /// Assistant response (or substituted fallback text).
    pub response: String,
    /// Processing wall time in milliseconds.
    pub processing_ms: f64,
    /// Sentiment placeholder.
    pub sentiment: String,
    /// Tool family the turn was attributed to.
    pub tool: ToolKind,
}

/// Aggregate metrics over the recorded turns.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AnalyticsReport {
    /// Total turns recorded.
    pub total_conversations: usize,
    /// Mean processing time in milliseconds.
    pub avg_processing_ms: f64,
    /// Frequency table of tool tags.
    pub tool_usage: BTreeMap<String, usize>,
    /// Frequency table of sentiment labels.
    pub sentiment_distribution: BTreeMap<String, usize>,
}

/// Session-scoped accumulator, one row per turn.
#[derive(Debug, Default)]
pub struct ConversationAnalytics {
    records: Vec<ConversationRecord>,
}

impl ConversationAnalytics {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one turn.
    pub fn track(
        &mut self,
        input: impl Into<String>,
        response: impl Into<String>,
        processing: Duration,
        sentiment: impl Into<String>,
        tool: ToolKind,
    ) {
        self.records.push(ConversationRecord {
            timestamp: Utc::now(),
            input: input.into(),
            response: response.into(),
            processing_ms: processing.as_secs_f64() * 1000.0,
            sentiment: sentiment.into(),
            tool,
        });
    }

    /// Number of recorded turns.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Recorded rows, oldest first.
    pub fn records(&self) -> &[ConversationRecord] {
        &self.records
    }

    /// Aggregate the recorded turns.
    ///
    /// An empty dataset returns placeholder defaults instead of dividing by
    /// zero: zero totals with single-entry `chat` / `neutral` tables, the
    /// shape downstream charting expects.
    pub fn report(&self) -> AnalyticsReport {
        if self.records.is_empty() {
            return AnalyticsReport {
                total_conversations: 0,
                avg_processing_ms: 0.0,
                tool_usage: BTreeMap::from([("chat".to_string(), 1)]),
                sentiment_distribution: BTreeMap::from([("neutral".to_string(), 1)]),
            };
        }

        let total = self.records.len();
        let avg_processing_ms =
            self.records.iter().map(|row| row.processing_ms).sum::<f64>() / total as f64;

        let mut tool_usage = BTreeMap::new();
        let mut sentiment_distribution = BTreeMap::new();
        for row in &self.records {
            *tool_usage.entry(row.tool.as_str().to_string()).or_insert(0) += 1;
            *sentiment_distribution
                .entry(row.sentiment.clone())
                .or_insert(0) += 1;
        }

        AnalyticsReport {
            total_conversations: total,
            avg_processing_ms,
            tool_usage,
            sentiment_distribution,
        }
    }
}
