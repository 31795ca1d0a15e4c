mod fastembed_manager;
mod openai;

pub use fastembed_manager::FastEmbedManager;
pub use openai::OpenAiEmbedder;

use crate::error::EmbeddingError;
use anyhow::Result;

/// Trait for embedding generation
#[async_trait::async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Generate embeddings for a batch of text
    async fn embed_batch(&self, texts: Vec<String>) -> Result<Vec<Vec<f32>>>;

    /// Get the dimension of the embeddings
    fn dimension(&self) -> usize;

    /// Get the model name
    fn model_name(&self) -> &str;
}

/// Build an embedding provider from a provider name
///
/// - `hf`: local fastembed model
/// - `openai`: hosted embeddings API (requires `OPENAI_API_KEY`)
pub fn provider_from_name(
    provider: &str,
    model: &str,
) -> Result<Box<dyn EmbeddingProvider>, EmbeddingError> {
    match provider {
        "hf" => Ok(Box::new(FastEmbedManager::from_model_name(model)?)),
        "openai" => Ok(Box::new(OpenAiEmbedder::from_env(model)?)),
        other => Err(EmbeddingError::UnknownProvider(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_provider_is_rejected() {
        let err = provider_from_name("cohere", "some-model").unwrap_err();
        assert!(matches!(err, EmbeddingError::UnknownProvider(name) if name == "cohere"));
    }

    #[test]
    fn test_empty_provider_is_rejected() {
        let err = provider_from_name("", "some-model").unwrap_err();
        assert!(matches!(err, EmbeddingError::UnknownProvider(_)));
    }

    #[test]
    fn test_openai_provider_requires_api_key() {
        // Only meaningful when the key is absent from the environment
        if std::env::var("OPENAI_API_KEY").is_err() {
            let err = provider_from_name("openai", "text-embedding-3-small").unwrap_err();
            assert!(matches!(err, EmbeddingError::InitializationFailed(_)));
        }
    }
}
