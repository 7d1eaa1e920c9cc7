//! Prompt assembly for a single turn.
//!
//! The layout is fixed and reproducible: system preamble, an optional
//! `Previous conversation:` block holding the most recent exchanges, the
//! current input, and a literal `Assistant:` generation cue.

use parley_memory::MemoryEntry;

/// Number of context exchanges rendered into the prompt.
pub const CONTEXT_TURNS: usize = 3;

/// Fixed persona and style preamble sent with every request.
pub const SYSTEM_PREAMBLE: &str = "\
You are a helpful and friendly AI assistant. Maintain a natural conversation flow.

Core capabilities:
- Answer questions and provide information
- Help with analysis and problem-solving
- Explain complex topics simply
- Engage in casual conversation
- Provide suggestions and recommendations

Style guidelines:
- Be friendly and conversational
- Keep responses concise but informative
- Show understanding and empathy
- Ask follow-up questions when appropriate
- Stay focused on the user's needs

Remember previous context and maintain conversation continuity.";

/// Assemble the full prompt for `input` over the given context window.
///
/// Only the last [`CONTEXT_TURNS`] entries are rendered, even when the
/// memory window holds more.
pub fn build_prompt(input: &str, context: &[MemoryEntry]) -> String {
    let context_block = render_context(context);
    format!("{SYSTEM_PREAMBLE}\n\n{context_block}\nUser: {input}\nAssistant:")
}

fn render_context(context: &[MemoryEntry]) -> String {
    if context.is_empty() {
        return String::new();
    }
    let start = context.len().saturating_sub(CONTEXT_TURNS);
    let lines: Vec<String> = context[start..]
        .iter()
        .map(|entry| format!("User: {}\nAssistant: {}", entry.input, entry.response))
        .collect();
    format!("\nPrevious conversation:\n{}", lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::{CONTEXT_TURNS, SYSTEM_PREAMBLE, build_prompt};
    use parley_memory::MemoryEntry;
    use pretty_assertions::assert_eq;

    fn entries(count: usize) -> Vec<MemoryEntry> {
        (0..count)
            .map(|turn| MemoryEntry::new(format!("q{turn}"), format!("a{turn}")))
            .collect()
    }

    #[test]
    fn empty_context_skips_the_history_block() {
        let prompt = build_prompt("hello", &[]);
        assert_eq!(prompt, format!("{SYSTEM_PREAMBLE}\n\n\nUser: hello\nAssistant:"));
        assert!(!prompt.contains("Previous conversation:"));
    }

    #[test]
    fn context_renders_alternating_lines() {
        let prompt = build_prompt("next", &entries(2));
        assert!(prompt.contains(
            "Previous conversation:\nUser: q0\nAssistant: a0\nUser: q1\nAssistant: a1"
        ));
        assert!(prompt.ends_with("User: next\nAssistant:"));
    }

    #[test]
    fn only_the_most_recent_three_exchanges_survive() {
        let prompt = build_prompt("next", &entries(4));
        assert!(!prompt.contains("User: q0\n"));
        for turn in 1..4 {
            assert!(prompt.contains(&format!("User: q{turn}\nAssistant: a{turn}")));
        }
        assert_eq!(CONTEXT_TURNS, 3);
    }
}
