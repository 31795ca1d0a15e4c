//! # git-recall - Semantic Search over Git Commit History
//!
//! git-recall extracts a repository's commit history, embeds the commit
//! messages into vectors, stores them in an embedded vector database, and
//! answers natural-language queries about the history. Retrieved commits can
//! optionally be summarized by a chat-completion model.
//!
//! ## Pipeline
//!
//! ```text
//! git log ──▶ embedding provider ──▶ LanceDB index + JSON manifest
//!                                          │
//!              query ──▶ embed ──▶ similarity search ──▶ results
//!                                          │
//!                                 (optional) LLM summarization
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: clap-based command-line interface
//! - [`client`]: high-level pipeline orchestration (`RecallClient`)
//! - [`git`]: commit extraction by shelling out to `git`
//! - [`embedding`]: embedding providers (local fastembed, hosted OpenAI)
//! - [`vector_db`]: vector database abstraction over LanceDB
//! - [`llm`]: chat-completion providers and result summarization
//! - [`manifest`]: JSON manifests pointing at prepared index directories
//! - [`config`]: configuration with TOML file support
//! - [`types`]: request/response types for the pipeline operations
//! - [`error`]: error types and utilities
//! - [`paths`]: platform path utilities
//!
//! ## Usage Example
//!
//! ```no_run
//! use git_recall::client::RecallClient;
//! use git_recall::types::SearchParams;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = RecallClient::new()?;
//!     let outcome = client
//!         .search(SearchParams {
//!             query: "when was rate limiting added?".to_string(),
//!             provider: "hf".to_string(),
//!             model: "BAAI/bge-small-en-v1.5".to_string(),
//!             limit: 5,
//!             summarize: false,
//!             llm_provider: "openai".to_string(),
//!             llm_model: "gpt-4.1-nano".to_string(),
//!         })
//!         .await?;
//!     for commit in outcome.results {
//!         println!("{}: {}", commit.sha, commit.message);
//!     }
//!     Ok(())
//! }
//! ```

/// Command-line interface
pub mod cli;

/// High-level pipeline orchestration
pub mod client;

/// Configuration with TOML file support
pub mod config;

/// Embedding providers (local fastembed, hosted OpenAI)
pub mod embedding;

/// Error types and utilities
pub mod error;

/// Git commit extraction
pub mod git;

/// Chat-completion providers and result summarization
pub mod llm;

/// Embedding manifests pointing at prepared index directories
pub mod manifest;

/// Platform path utilities
pub mod paths;

/// Request/response types for the pipeline operations
pub mod types;

/// Vector database abstraction over LanceDB
pub mod vector_db;
