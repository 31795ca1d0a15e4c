use super::EmbeddingProvider;
use crate::error::EmbeddingError;
use anyhow::Result;
use fastembed::{EmbeddingModel, InitOptions, TextEmbedding};
use std::sync::Mutex;

/// Local embedding provider backed by fastembed
///
/// The model runs in-process; the first use downloads the model files.
pub struct FastEmbedManager {
    // fastembed's embed() takes &mut self
    model: Mutex<TextEmbedding>,
    model_name: String,
    dimension: usize,
}

impl FastEmbedManager {
    /// Create a manager with the default model (BAAI/bge-small-en-v1.5)
    pub fn new() -> Result<Self, EmbeddingError> {
        Self::from_model_name("BAAI/bge-small-en-v1.5")
    }

    /// Create a manager from a model name string
    ///
    /// fastembed supports an enumerated model set, so unrecognized names are
    /// rejected here rather than at embed time.
    pub fn from_model_name(name: &str) -> Result<Self, EmbeddingError> {
        let model = match name {
            "BAAI/bge-small-en-v1.5" | "bge-small-en-v1.5" => EmbeddingModel::BGESmallENV15,
            "BAAI/bge-base-en-v1.5" | "bge-base-en-v1.5" => EmbeddingModel::BGEBaseENV15,
            "all-MiniLM-L6-v2" => EmbeddingModel::AllMiniLML6V2,
            "all-MiniLM-L12-v2" => EmbeddingModel::AllMiniLML12V2,
            other => return Err(EmbeddingError::UnsupportedModel(other.to_string())),
        };
        Self::with_model(model, name)
    }

    fn with_model(model: EmbeddingModel, name: &str) -> Result<Self, EmbeddingError> {
        tracing::info!("Initializing fastembed model: {:?}", model);

        let dimension = match model {
            EmbeddingModel::BGEBaseENV15 => 768,
            // bge-small and the all-MiniLM family are all 384-dimensional
            _ => 384,
        };

        let mut options = InitOptions::default();
        options.model_name = model;
        options.show_download_progress = true;

        let embedding_model = TextEmbedding::try_new(options)
            .map_err(|e| EmbeddingError::InitializationFailed(e.to_string()))?;

        Ok(Self {
            model: Mutex::new(embedding_model),
            model_name: name.to_string(),
            dimension,
        })
    }
}

#[async_trait::async_trait]
impl EmbeddingProvider for FastEmbedManager {
    async fn embed_batch(&self, texts: Vec<String>) -> Result<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(vec![]);
        }

        tracing::debug!("Generating embeddings for {} texts", texts.len());

        let mut model = self
            .model
            .lock()
            .map_err(|e| EmbeddingError::LockPoisoned(e.to_string()))?;
        let embeddings = model
            .embed(texts, None)
            .map_err(|e| EmbeddingError::GenerationFailed(e.to_string()))?;

        Ok(embeddings)
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_model_is_rejected() {
        let err = FastEmbedManager::from_model_name("definitely/not-a-model").unwrap_err();
        assert!(matches!(err, EmbeddingError::UnsupportedModel(name) if name == "definitely/not-a-model"));
    }

    // Model-loading tests download weights on first run, so they are ignored
    // by default and run explicitly with `cargo test -- --ignored`.

    #[tokio::test]
    #[ignore]
    async fn test_embedding_generation() {
        let manager = FastEmbedManager::new().unwrap();
        let texts = vec![
            "Fix authentication bug".to_string(),
            "Add pagination to commit listing".to_string(),
        ];

        let embeddings = manager.embed_batch(texts).await.unwrap();
        assert_eq!(embeddings.len(), 2);
        assert_eq!(embeddings[0].len(), 384);
        assert_eq!(embeddings[1].len(), 384);
    }

    #[tokio::test]
    #[ignore]
    async fn test_empty_batch() {
        let manager = FastEmbedManager::new().unwrap();
        let embeddings = manager.embed_batch(vec![]).await.unwrap();
        assert!(embeddings.is_empty());
    }

    #[tokio::test]
    #[ignore]
    async fn test_dimension_and_model_name() {
        let manager = FastEmbedManager::new().unwrap();
        assert_eq!(manager.dimension(), 384);
        assert_eq!(manager.model_name(), "BAAI/bge-small-en-v1.5");
    }
}
