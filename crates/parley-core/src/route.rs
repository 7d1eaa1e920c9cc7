//! Keyword routing of inputs to tool tags.
//!
//! The router only tags turns for analytics; no tool body is executed. The
//! lookup is a case-insensitive substring match, first hit wins.

use serde::{Deserialize, Serialize};

/// Tool family a turn is attributed to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ToolKind {
    /// Plain conversation, the default.
    Chat,
    /// Web search requests.
    WebSearch,
    /// Email composition requests.
    Email,
    /// Customer support inquiries.
    CustomerSupport,
    /// Personal assistant requests.
    PersonalAssist,
    /// Content creation requests.
    ContentCreator,
}

impl ToolKind {
    /// Return the tag as a snake_case string.
    pub fn as_str(&self) -> &'static str {
        match self {
            ToolKind::Chat => "chat",
            ToolKind::WebSearch => "web_search",
            ToolKind::Email => "email",
            ToolKind::CustomerSupport => "customer_support",
            ToolKind::PersonalAssist => "personal_assist",
            ToolKind::ContentCreator => "content_creator",
        }
    }
}

/// Keyword table, checked in order.
const KEYWORD_MAP: [(&str, ToolKind); 5] = [
    ("search", ToolKind::WebSearch),
    ("email", ToolKind::Email),
    ("support", ToolKind::CustomerSupport),
    ("assist", ToolKind::PersonalAssist),
    ("content", ToolKind::ContentCreator),
];

/// Tag an input with the tool family it would have been routed to.
pub fn route(input: &str) -> ToolKind {
    let lowered = input.to_lowercase();
    for (keyword, tool) in KEYWORD_MAP {
        if lowered.contains(keyword) {
            return tool;
        }
    }
    ToolKind::Chat
}

#[cfg(test)]
mod tests {
    use super::{ToolKind, route};
    use pretty_assertions::assert_eq;

    #[test]
    fn keywords_map_to_tools() {
        assert_eq!(route("Search for rust crates"), ToolKind::WebSearch);
        assert_eq!(route("write an EMAIL to my team"), ToolKind::Email);
        assert_eq!(route("I need support with my order"), ToolKind::CustomerSupport);
        assert_eq!(route("assist me with planning"), ToolKind::PersonalAssist);
        assert_eq!(route("draft content for twitter"), ToolKind::ContentCreator);
    }

    #[test]
    fn unmatched_input_defaults_to_chat() {
        assert_eq!(route("how tall is the eiffel tower"), ToolKind::Chat);
    }

    #[test]
    fn first_keyword_wins() {
        assert_eq!(route("search my email"), ToolKind::WebSearch);
    }
}
