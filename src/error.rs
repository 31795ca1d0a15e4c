/// Centralized error types for git-recall using thiserror
///
/// Provides domain-specific error types for better error handling and user-facing messages.
use thiserror::Error;

/// Main error type for the recall pipeline
#[derive(Error, Debug)]
pub enum RecallError {
    #[error("Git error: {0}")]
    Git(#[from] GitError),

    #[error("Embedding error: {0}")]
    Embedding(#[from] EmbeddingError),

    #[error("Vector database error: {0}")]
    VectorDb(#[from] VectorDbError),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("Manifest error: {0}")]
    Manifest(#[from] ManifestError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

/// Errors related to git commit extraction
#[derive(Error, Debug)]
pub enum GitError {
    #[error("provided folder is missing or is not a Git repository: {0}")]
    RepoNotFound(String),

    #[error("git command failed: {0}")]
    CommandFailed(String),

    #[error("git output is not valid UTF-8")]
    InvalidOutput,

    #[error("no commits found in repository")]
    NoCommitsFound,
}

/// Errors related to embedding generation
#[derive(Error, Debug)]
pub enum EmbeddingError {
    #[error("Unknown embedding provider: {0}")]
    UnknownProvider(String),

    #[error("Unsupported embedding model: {0}")]
    UnsupportedModel(String),

    #[error("Failed to initialize embedding model: {0}")]
    InitializationFailed(String),

    #[error("Failed to generate embeddings: {0}")]
    GenerationFailed(String),

    #[error("Model lock was poisoned: {0}")]
    LockPoisoned(String),
}

/// Errors related to vector database operations
#[derive(Error, Debug)]
pub enum VectorDbError {
    #[error("Failed to initialize vector database: {0}")]
    InitializationFailed(String),

    #[error("Failed to store embeddings: {0}")]
    StoreFailed(String),

    #[error("Failed to search embeddings: {0}")]
    SearchFailed(String),
}

/// Errors related to LLM summarization
#[derive(Error, Debug)]
pub enum LlmError {
    #[error("Unknown LLM provider: {0}")]
    UnknownProvider(String),

    #[error("Failed to initialize LLM client: {0}")]
    InitializationFailed(String),

    #[error("LLM request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid LLM response: {0}")]
    InvalidResponse(String),
}

/// Errors related to embedding manifests
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("No embeddings found. Run 'prepare' first.")]
    NoEmbeddings,

    #[error("Failed to read manifest '{path}': {reason}")]
    LoadFailed { path: String, reason: String },

    #[error("Failed to write manifest '{path}': {reason}")]
    SaveFailed { path: String, reason: String },
}

/// Errors related to input validation
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Query exceeds {max} characters (got {actual})")]
    QueryTooLong { max: usize, actual: usize },

    #[error("Empty {0}")]
    Empty(String),
}

/// Errors related to configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} is not set. Run export {0}='<key>'")]
    MissingEnv(String),

    #[error("Failed to load configuration file: {0}")]
    LoadFailed(String),

    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

// Conversion from anyhow::Error to RecallError
impl From<anyhow::Error> for RecallError {
    fn from(err: anyhow::Error) -> Self {
        RecallError::Other(format!("{:#}", err))
    }
}

impl RecallError {
    /// Create a new error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        RecallError::Other(msg.into())
    }

    /// Check if this is a user error (bad input or missing state) vs system error
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            RecallError::Validation(_)
                | RecallError::Git(GitError::RepoNotFound(_))
                | RecallError::Manifest(ManifestError::NoEmbeddings)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RecallError::Git(GitError::RepoNotFound("/tmp/nowhere".to_string()));
        assert_eq!(
            err.to_string(),
            "Git error: provided folder is missing or is not a Git repository: /tmp/nowhere"
        );
    }

    #[test]
    fn test_unknown_provider_display() {
        let err = EmbeddingError::UnknownProvider("cohere".to_string());
        assert_eq!(err.to_string(), "Unknown embedding provider: cohere");
    }

    #[test]
    fn test_query_too_long_display() {
        let err = ValidationError::QueryTooLong {
            max: 200,
            actual: 250,
        };
        assert_eq!(err.to_string(), "Query exceeds 200 characters (got 250)");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: RecallError = io_err.into();
        assert!(matches!(err, RecallError::Io(_)));
    }

    #[test]
    fn test_error_from_anyhow() {
        let anyhow_err = anyhow::anyhow!("test error");
        let err: RecallError = anyhow_err.into();
        assert!(matches!(err, RecallError::Other(_)));
    }

    #[test]
    fn test_is_user_error() {
        let user_err = RecallError::Manifest(ManifestError::NoEmbeddings);
        assert!(user_err.is_user_error());

        let system_err = RecallError::VectorDb(VectorDbError::SearchFailed("boom".to_string()));
        assert!(!system_err.is_user_error());
    }

    #[test]
    fn test_error_chain() {
        let llm_err = LlmError::RequestFailed("connection reset".to_string());
        let err: RecallError = llm_err.into();
        assert_eq!(
            err.to_string(),
            "LLM error: LLM request failed: connection reset"
        );
    }
}
