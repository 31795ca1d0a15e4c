//! Core library client for git-recall
//!
//! This module provides the main client interface for driving the pipeline:
//! commit extraction, embedding, vector store persistence, similarity search,
//! and optional LLM summarization. The CLI is a thin wrapper around it.

use crate::config::Config;
use crate::error::{GitError, ManifestError, ValidationError};
use crate::git::GitRepo;
use crate::llm::Summarizer;
use crate::manifest::{
    self, EmbeddingManifest, index_dir_name, manifest_file_name, timestamp_slug,
};
use crate::types::{CleanupSummary, PrepareSummary, SearchOutcome, SearchParams};
use crate::vector_db::{LanceVectorDB, VectorDatabase};

use anyhow::{Context, Result};
use chrono::Utc;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Main client for preparing and searching commit history embeddings
///
/// # Example
///
/// ```no_run
/// use git_recall::client::RecallClient;
///
/// #[tokio::main]
/// async fn main() -> anyhow::Result<()> {
///     let client = RecallClient::new()?;
///     let summary = client
///         .prepare(std::path::Path::new("/path/to/repo"), "hf", "BAAI/bge-small-en-v1.5")
///         .await?;
///     println!("Indexed {} commits", summary.doc_count);
///     Ok(())
/// }
/// ```
pub struct RecallClient {
    config: Config,
}

impl RecallClient {
    /// Create a client with the default configuration
    pub fn new() -> Result<Self> {
        let config = Config::new().context("Failed to load configuration")?;
        Ok(Self::with_config(config))
    }

    /// Create a client with a custom configuration
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// The store directory holding manifests and index directories
    pub fn store_dir(&self) -> &Path {
        &self.config.store.store_dir
    }

    /// Access the active configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Extract commits, generate embeddings, and index them for future searches
    pub async fn prepare(
        &self,
        folder: &Path,
        provider: &str,
        model: &str,
    ) -> Result<PrepareSummary> {
        let started = Instant::now();

        let repo = GitRepo::open(folder)?;
        let branch = repo.current_branch()?;
        tracing::info!(
            "Preparing embeddings for branch {} at {}",
            branch,
            folder.display()
        );

        let commits = repo.extract_commits()?;
        if commits.is_empty() {
            return Err(GitError::NoCommitsFound.into());
        }

        let embedder = crate::embedding::provider_from_name(provider, model)?;
        let texts: Vec<String> = commits.iter().map(|c| c.message.clone()).collect();
        let embeddings = embedder
            .embed_batch(texts)
            .await
            .context("Failed to embed commit messages")?;

        let created_at = Utc::now();
        let slug = timestamp_slug(created_at);
        let index_dir = self.store_dir().join(index_dir_name(&slug));

        let db = LanceVectorDB::with_path(&index_dir.to_string_lossy()).await?;
        db.initialize(embedder.dimension()).await?;
        db.store_commits(embeddings, &commits).await?;

        let manifest = EmbeddingManifest {
            branch: branch.clone(),
            created_at,
            provider: provider.to_string(),
            doc_count: commits.len(),
            path: folder.to_path_buf(),
            index_dir: index_dir.clone(),
        };
        let manifest_path = self.store_dir().join(manifest_file_name(folder, &slug));
        manifest.save(&manifest_path)?;

        Ok(PrepareSummary {
            branch,
            doc_count: manifest.doc_count,
            manifest_path,
            index_dir,
            duration_ms: started.elapsed().as_millis() as u64,
        })
    }

    /// List all available embeddings, newest first
    ///
    /// Fails when no embeddings have been prepared yet.
    pub fn list_embeddings(&self) -> Result<Vec<(PathBuf, EmbeddingManifest)>> {
        let manifests = manifest::list_manifests(self.store_dir())?;
        if manifests.is_empty() {
            return Err(ManifestError::NoEmbeddings.into());
        }
        Ok(manifests)
    }

    /// Search the latest embedding index and optionally summarize via LLM
    pub async fn search(&self, params: SearchParams) -> Result<SearchOutcome> {
        let started = Instant::now();

        let max = self.config.search.max_query_chars;
        let actual = params.query.chars().count();
        if actual > max {
            return Err(ValidationError::QueryTooLong { max, actual }.into());
        }

        let (manifest_path, manifest) = manifest::latest_manifest(self.store_dir())?;
        tracing::info!(
            "Searching {} ({} docs, branch {})",
            manifest_path.display(),
            manifest.doc_count,
            manifest.branch
        );

        let embedder = crate::embedding::provider_from_name(&params.provider, &params.model)?;
        let query_vectors = embedder
            .embed_batch(vec![params.query.clone()])
            .await
            .context("Failed to embed query")?;
        let query_vector = query_vectors
            .into_iter()
            .next()
            .context("Embedding provider returned no vector for the query")?;

        let db = LanceVectorDB::with_path(&manifest.index_dir.to_string_lossy()).await?;
        let results = db.search(query_vector, params.limit).await?;

        let answer = if params.summarize {
            let chat = crate::llm::chat_model_from_name(&params.llm_provider, &params.llm_model)?;
            let summarizer = Summarizer::new(chat);
            Some(summarizer.summarize(&results, &params.query).await?)
        } else {
            None
        };

        Ok(SearchOutcome {
            results,
            answer,
            duration_ms: started.elapsed().as_millis() as u64,
        })
    }

    /// Remove all manifest files and index directories created by this tool
    pub fn cleanup(&self) -> Result<CleanupSummary> {
        manifest::cleanup(self.store_dir())
    }
}
