use super::EmbeddingProvider;
use crate::config::openai_api_key;
use crate::error::EmbeddingError;
use anyhow::Result;
use serde::{Deserialize, Serialize};

const EMBEDDINGS_URL: &str = "https://api.openai.com/v1/embeddings";

#[derive(Debug, Serialize)]
struct EmbeddingRequest {
    model: String,
    input: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingData {
    embedding: Vec<f32>,
}

/// Hosted embedding provider using the OpenAI embeddings API
pub struct OpenAiEmbedder {
    api_key: String,
    model: String,
    dimension: usize,
    client: reqwest::Client,
}

impl OpenAiEmbedder {
    /// Create an embedder reading the API key from `OPENAI_API_KEY`
    pub fn from_env(model: &str) -> Result<Self, EmbeddingError> {
        let api_key =
            openai_api_key().map_err(|e| EmbeddingError::InitializationFailed(e.to_string()))?;
        Ok(Self::new(api_key, model))
    }

    /// Create an embedder with an explicit API key
    pub fn new(api_key: String, model: &str) -> Self {
        let dimension = match model {
            "text-embedding-3-small" => 1536,
            "text-embedding-3-large" => 3072,
            "text-embedding-ada-002" => 1536,
            _ => 1536,
        };

        Self {
            api_key,
            model: model.to_string(),
            dimension,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait::async_trait]
impl EmbeddingProvider for OpenAiEmbedder {
    async fn embed_batch(&self, texts: Vec<String>) -> Result<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(vec![]);
        }

        tracing::debug!("Requesting {} embeddings from OpenAI", texts.len());

        let request = EmbeddingRequest {
            model: self.model.clone(),
            input: texts,
        };

        let response = self
            .client
            .post(EMBEDDINGS_URL)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await
            .map_err(|e| EmbeddingError::GenerationFailed(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(
                EmbeddingError::GenerationFailed(format!("OpenAI API error ({}): {}", status, body))
                    .into(),
            );
        }

        let parsed: EmbeddingResponse = response
            .json()
            .await
            .map_err(|e| EmbeddingError::GenerationFailed(format!("invalid response: {}", e)))?;

        Ok(parsed.data.into_iter().map(|d| d.embedding).collect())
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_per_model() {
        assert_eq!(
            OpenAiEmbedder::new("k".into(), "text-embedding-3-small").dimension(),
            1536
        );
        assert_eq!(
            OpenAiEmbedder::new("k".into(), "text-embedding-3-large").dimension(),
            3072
        );
        assert_eq!(
            OpenAiEmbedder::new("k".into(), "some-future-model").dimension(),
            1536
        );
    }

    #[test]
    fn test_model_name() {
        let embedder = OpenAiEmbedder::new("k".into(), "text-embedding-3-small");
        assert_eq!(embedder.model_name(), "text-embedding-3-small");
    }

    #[tokio::test]
    async fn test_empty_batch_skips_request() {
        let embedder = OpenAiEmbedder::new("not-a-real-key".into(), "text-embedding-3-small");
        let embeddings = embedder.embed_batch(vec![]).await.unwrap();
        assert!(embeddings.is_empty());
    }
}
