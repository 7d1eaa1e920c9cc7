//! Sliding window buffer for conversation history.
//!
//! Stores exchanges in a bounded buffer that evicts the oldest entry when
//! the capacity is reached. The window is session-scoped and accessed by a
//! single caller at a time, so there is no interior locking.

use crate::model::MemoryEntry;
use std::collections::VecDeque;

/// Default number of exchanges to remember.
pub const DEFAULT_WINDOW_SIZE: usize = 5;

/// Fixed-capacity FIFO window over past exchanges, oldest first.
#[derive(Debug, Clone)]
pub struct WindowBuffer {
    entries: VecDeque<MemoryEntry>,
    capacity: usize,
}

impl Default for WindowBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_SIZE)
    }
}

impl WindowBuffer {
    /// Create a buffer holding at most `capacity` entries (minimum 1).
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append an exchange, silently evicting the oldest entry on overflow.
    pub fn add(&mut self, input: impl Into<String>, response: impl Into<String>) {
        if self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(MemoryEntry::new(input, response));
    }

    /// Snapshot of the current window, oldest first.
    pub fn context(&self) -> Vec<MemoryEntry> {
        self.entries.iter().cloned().collect()
    }

    /// Render the whole window as alternating `User:` / `Assistant:` lines.
    pub fn formatted_history(&self) -> String {
        let mut lines = Vec::with_capacity(self.entries.len() * 2);
        for entry in &self.entries {
            lines.push(format!("User: {}", entry.input));
            lines.push(format!("Assistant: {}", entry.response));
        }
        lines.join("\n")
    }

    /// Drop every remembered exchange.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of exchanges currently held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the window is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of exchanges the window can hold.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
