//! The single table of user-facing fallback text.
//!
//! Every layer below this one reports failures as tagged errors; only the
//! outermost shell turns a tag into prose, and only through this table. The
//! worst-case outcome of any failure is one of these canned replies.

use crate::error::AgentError;
use parley_llm::LlmError;

/// Reply when the input was blank.
pub const EMPTY_INPUT: &str = "I didn't catch that. Could you say it again?";

/// Reply when no endpoint credentials were configured.
pub const MISSING_CREDENTIALS: &str = "I can answer questions, help with analysis, \
and chat about most topics, but I'm not connected to a language model right now. \
Check the API key configuration and try again.";

/// Reply when the endpoint call failed.
pub const TECHNICAL_ISSUE: &str =
    "I'd like to help but having a small technical issue. Could you try asking that again?";

/// Reply when the model produced nothing usable.
pub const EMPTY_COMPLETION: &str =
    "Could you please rephrase that? I want to make sure I understand correctly.";

/// Reply for any orchestration-side failure.
pub const INTERNAL: &str = "Something went wrong. Please try again.";

/// Map a tagged failure to its canned user-facing reply.
pub fn text_for(error: &AgentError) -> &'static str {
    match error {
        AgentError::Generate(LlmError::EmptyInput) => EMPTY_INPUT,
        AgentError::Generate(LlmError::MissingCredentials) => MISSING_CREDENTIALS,
        AgentError::Generate(LlmError::Transport(_))
        | AgentError::Generate(LlmError::Endpoint { .. }) => TECHNICAL_ISSUE,
        AgentError::Generate(LlmError::EmptyCompletion) => EMPTY_COMPLETION,
        AgentError::Internal(_) => INTERNAL,
    }
}

#[cfg(test)]
mod tests {
    use super::{EMPTY_COMPLETION, EMPTY_INPUT, INTERNAL, TECHNICAL_ISSUE, text_for};
    use crate::error::AgentError;
    use parley_llm::LlmError;
    use pretty_assertions::assert_eq;

    #[test]
    fn each_tag_maps_to_fixed_text() {
        assert_eq!(
            text_for(&AgentError::Generate(LlmError::EmptyInput)),
            EMPTY_INPUT
        );
        assert_eq!(
            text_for(&AgentError::Generate(LlmError::Endpoint {
                status: 500,
                message: "boom".to_string(),
            })),
            TECHNICAL_ISSUE
        );
        assert_eq!(
            text_for(&AgentError::Generate(LlmError::EmptyCompletion)),
            EMPTY_COMPLETION
        );
        assert_eq!(text_for(&AgentError::Internal("bad".to_string())), INTERNAL);
    }
}
