use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A commit returned from similarity search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredCommit {
    /// Similarity score (0.0 to 1.0, higher is closer)
    pub score: f32,
    /// Full commit SHA hash
    pub sha: String,
    /// Author's name
    pub author: String,
    /// Author date as formatted by git
    pub date: String,
    /// Commit subject line
    pub message: String,
}

/// Parameters for a `search` run
#[derive(Debug, Clone)]
pub struct SearchParams {
    /// The question or search query
    pub query: String,
    /// Embedding provider name
    pub provider: String,
    /// Embedding model name
    pub model: String,
    /// Maximum number of results to return
    pub limit: usize,
    /// Forward the results to an LLM for summarization
    pub summarize: bool,
    /// LLM provider for summarization
    pub llm_provider: String,
    /// LLM model for summarization
    pub llm_model: String,
}

/// Result of a `prepare` run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrepareSummary {
    /// Branch that was indexed
    pub branch: String,
    /// Number of commit messages embedded
    pub doc_count: usize,
    /// Path of the manifest file written
    pub manifest_path: PathBuf,
    /// Vector store directory created for this run
    pub index_dir: PathBuf,
    /// Time taken in milliseconds
    pub duration_ms: u64,
}

/// Result of a `search` run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchOutcome {
    /// Matching commits, ordered by relevance
    pub results: Vec<ScoredCommit>,
    /// LLM answer, present when summarization was requested
    pub answer: Option<String>,
    /// Time taken in milliseconds
    pub duration_ms: u64,
}

/// Result of a `cleanup` run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleanupSummary {
    /// Manifest files deleted
    pub manifests_deleted: Vec<PathBuf>,
    /// Index directories deleted
    pub index_dirs_deleted: Vec<PathBuf>,
}
