//! Chat-completion providers and result summarization

mod openai;
mod summarizer;

pub use openai::OpenAiChat;
pub use summarizer::{Summarizer, short_message};

use crate::error::LlmError;
use anyhow::Result;

/// Trait for single-shot chat completion
#[async_trait::async_trait]
pub trait ChatModel: Send + Sync {
    /// Send one prompt and return the model's reply text
    async fn complete(&self, prompt: &str) -> Result<String>;

    /// Get the model name
    fn model_name(&self) -> &str;
}

/// Build a chat model from a provider name
///
/// Only `openai` is implemented; it requires `OPENAI_API_KEY`.
pub fn chat_model_from_name(provider: &str, model: &str) -> Result<Box<dyn ChatModel>, LlmError> {
    match provider {
        "openai" => Ok(Box::new(OpenAiChat::from_env(model)?)),
        other => Err(LlmError::UnknownProvider(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_llm_provider_is_rejected() {
        let err = chat_model_from_name("anthropic", "some-model").unwrap_err();
        assert!(matches!(err, LlmError::UnknownProvider(name) if name == "anthropic"));
    }

    #[test]
    fn test_openai_chat_requires_api_key() {
        if std::env::var("OPENAI_API_KEY").is_err() {
            let err = chat_model_from_name("openai", "gpt-4.1-nano").unwrap_err();
            assert!(matches!(err, LlmError::InitializationFailed(_)));
        }
    }
}
