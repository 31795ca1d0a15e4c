/// Configuration system for git-recall
///
/// Supports loading from multiple sources with priority:
/// CLI args > Environment variables > Config file > Defaults
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Embedding provider configuration
    pub embedding: EmbeddingConfig,

    /// LLM summarization configuration
    pub llm: LlmConfig,

    /// Search configuration
    pub search: SearchConfig,

    /// Store configuration (manifests and index directories)
    pub store: StoreConfig,
}

/// Embedding provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddingConfig {
    /// Provider name: "hf" (local fastembed) or "openai"
    #[serde(default = "default_embedding_provider")]
    pub provider: String,

    /// Model name (e.g., "BAAI/bge-small-en-v1.5", "text-embedding-3-small")
    #[serde(default = "default_embedding_model")]
    pub model: String,
}

/// LLM summarization configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Provider name (only "openai" is implemented)
    #[serde(default = "default_llm_provider")]
    pub provider: String,

    /// Chat model name
    #[serde(default = "default_llm_model")]
    pub model: String,
}

/// Search configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Default number of results to return
    #[serde(default = "default_result_limit")]
    pub limit: usize,

    /// Maximum query length in characters
    #[serde(default = "default_max_query_chars")]
    pub max_query_chars: usize,
}

/// Store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Directory holding manifest files and index directories
    #[serde(default = "default_store_dir")]
    pub store_dir: PathBuf,
}

// Default value functions
fn default_embedding_provider() -> String {
    "hf".to_string()
}

fn default_embedding_model() -> String {
    "BAAI/bge-small-en-v1.5".to_string()
}

fn default_llm_provider() -> String {
    "openai".to_string()
}

fn default_llm_model() -> String {
    "gpt-4.1-nano".to_string()
}

fn default_result_limit() -> usize {
    5
}

fn default_max_query_chars() -> usize {
    200
}

fn default_store_dir() -> PathBuf {
    crate::paths::PlatformPaths::default_store_dir()
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            provider: default_embedding_provider(),
            model: default_embedding_model(),
        }
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: default_llm_provider(),
            model: default_llm_model(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            limit: default_result_limit(),
            max_query_chars: default_max_query_chars(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            store_dir: default_store_dir(),
        }
    }
}

impl Config {
    /// Load configuration from the default config file, falling back to defaults
    /// when no file exists.
    pub fn new() -> Result<Self, ConfigError> {
        let path = crate::paths::PlatformPaths::default_config_path();
        if path.exists() {
            Self::from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::LoadFailed(format!("{}: {}", path.display(), e)))?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseFailed(e.to_string()))
    }
}

/// Read the OpenAI API key from the environment
///
/// Required whenever a hosted provider (embeddings or chat) is selected.
pub fn openai_api_key() -> Result<String, ConfigError> {
    std::env::var("OPENAI_API_KEY")
        .ok()
        .filter(|key| !key.is_empty())
        .ok_or_else(|| ConfigError::MissingEnv("OPENAI_API_KEY".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.embedding.provider, "hf");
        assert_eq!(config.embedding.model, "BAAI/bge-small-en-v1.5");
        assert_eq!(config.llm.provider, "openai");
        assert_eq!(config.llm.model, "gpt-4.1-nano");
        assert_eq!(config.search.limit, 5);
        assert_eq!(config.search.max_query_chars, 200);
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[embedding]
provider = "openai"
model = "text-embedding-3-small"

[search]
limit = 10
"#,
        )
        .unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.embedding.provider, "openai");
        assert_eq!(config.embedding.model, "text-embedding-3-small");
        assert_eq!(config.search.limit, 10);
        // Unspecified sections fall back to defaults
        assert_eq!(config.llm.model, "gpt-4.1-nano");
        assert_eq!(config.search.max_query_chars, 200);
    }

    #[test]
    fn test_from_file_missing() {
        let result = Config::from_file(Path::new("/nonexistent/config.toml"));
        assert!(matches!(result, Err(ConfigError::LoadFailed(_))));
    }

    #[test]
    fn test_from_file_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "not [ valid toml").unwrap();

        let result = Config::from_file(&path);
        assert!(matches!(result, Err(ConfigError::ParseFailed(_))));
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config::default();
        let serialized = toml::to_string(&config).unwrap();
        let deserialized: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(deserialized.embedding.provider, config.embedding.provider);
        assert_eq!(deserialized.store.store_dir, config.store.store_dir);
    }
}
