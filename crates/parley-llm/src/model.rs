//! High-level generate(input, context) entry point.

use crate::clean::clean_response;
use crate::error::LlmError;
use crate::generator::TextGenerator;
use crate::prompt::build_prompt;
use log::debug;
use parley_memory::MemoryEntry;
use std::sync::Arc;

/// Adapter bundling prompt assembly, the endpoint seam, and cleanup.
#[derive(Clone)]
pub struct ChatModel {
    generator: Arc<dyn TextGenerator>,
}

impl ChatModel {
    /// Wrap a generator (real client or mock) behind the adapter contract.
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Generate a cleaned completion for `input` over the context window.
    ///
    /// Blank input is tagged as [`LlmError::EmptyInput`] before any network
    /// call. A completion that cleans down to nothing is tagged as
    /// [`LlmError::EmptyCompletion`].
    pub async fn generate(
        &self,
        input: &str,
        context: &[MemoryEntry],
    ) -> Result<String, LlmError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(LlmError::EmptyInput);
        }

        let prompt = build_prompt(input, context);
        let raw = self.generator.complete(&prompt).await?;
        let cleaned = clean_response(&raw);
        if cleaned.is_empty() {
            return Err(LlmError::EmptyCompletion);
        }
        debug!(
            "completion ready (raw_chars={}, cleaned_chars={})",
            raw.len(),
            cleaned.len()
        );
        Ok(cleaned)
    }
}

#[cfg(test)]
mod tests {
    use super::ChatModel;
    use crate::error::LlmError;
    use crate::generator::TextGenerator;
    use async_trait::async_trait;
    use parley_memory::MemoryEntry;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingGenerator {
        calls: AtomicUsize,
        reply: String,
    }

    impl CountingGenerator {
        fn new(reply: &str) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                reply: reply.to_string(),
            }
        }
    }

    #[async_trait]
    impl TextGenerator for CountingGenerator {
        async fn complete(&self, _prompt: &str) -> Result<String, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.reply.clone())
        }
    }

    #[tokio::test]
    async fn empty_input_short_circuits_before_the_endpoint() {
        let generator = Arc::new(CountingGenerator::new("unused"));
        let model = ChatModel::new(generator.clone());

        let err = model.generate("   ", &[]).await.expect_err("empty input");
        assert!(matches!(err, LlmError::EmptyInput));
        assert_eq!(generator.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn completions_are_cleaned() {
        let generator = Arc::new(CountingGenerator::new("Assistant: tidy reply"));
        let model = ChatModel::new(generator);

        let reply = model.generate("hi", &[]).await.expect("reply");
        assert_eq!(reply, "tidy reply");
    }

    #[tokio::test]
    async fn blank_completion_is_tagged() {
        let generator = Arc::new(CountingGenerator::new("Assistant:   "));
        let model = ChatModel::new(generator);

        let err = model.generate("hi", &[]).await.expect_err("blank");
        assert!(matches!(err, LlmError::EmptyCompletion));
    }

    #[tokio::test]
    async fn context_flows_into_the_prompt() {
        struct EchoPrompt;

        #[async_trait]
        impl TextGenerator for EchoPrompt {
            async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
                Ok(prompt.to_string())
            }
        }

        let model = ChatModel::new(Arc::new(EchoPrompt));
        let context = vec![MemoryEntry::new("earlier", "noted")];
        let reply = model.generate("now", &context).await.expect("reply");
        assert!(reply.contains("Previous conversation:"));
        assert!(reply.contains("User: earlier"));
    }
}
