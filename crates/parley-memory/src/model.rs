//! Memory entry model used by the window buffer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One completed (input, response) exchange held in the window.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MemoryEntry {
    /// User input for the exchange.
    pub input: String,
    /// Assistant response for the exchange.
    pub response: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl MemoryEntry {
    /// Create an entry stamped with the current time.
    pub fn new(input: impl Into<String>, response: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            response: response.into(),
            created_at: Utc::now(),
        }
    }
}
