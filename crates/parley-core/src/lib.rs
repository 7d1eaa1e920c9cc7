//! Conversation orchestration core for Parley.
//!
//! This crate owns the agent, per-session state, tool routing, analytics,
//! and the single table mapping tagged failures to user-facing fallback
//! text.

pub mod agent;
pub mod analytics;
mod error;
pub mod fallback;
pub mod route;
pub mod session;
pub mod types;

pub use agent::{Agent, AgentResult};
pub use analytics::{AnalyticsReport, ConversationAnalytics};
pub use error::AgentError;
pub use route::ToolKind;
pub use session::ChatSession;
pub use types::{Role, SessionId, Turn};
