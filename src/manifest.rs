//! Embedding manifests
//!
//! Every `prepare` run writes one JSON manifest into the store directory,
//! pointing at the vector store directory it created. `list-embeddings` and
//! `search` read these manifests; `cleanup` deletes them together with the
//! index directories.

use crate::error::ManifestError;
use crate::types::CleanupSummary;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Metadata for one prepared embedding index
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddingManifest {
    /// Branch that was indexed
    pub branch: String,
    /// When the index was created
    pub created_at: DateTime<Utc>,
    /// Embedding provider used ("hf" or "openai")
    pub provider: String,
    /// Number of commit messages embedded
    pub doc_count: usize,
    /// Repository path that was indexed
    pub path: PathBuf,
    /// Vector store directory for this run
    pub index_dir: PathBuf,
}

impl EmbeddingManifest {
    /// Load a manifest from disk
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let content = fs::read_to_string(path).map_err(|e| ManifestError::LoadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        serde_json::from_str(&content).map_err(|e| ManifestError::LoadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    /// Save the manifest to disk as pretty-printed JSON
    pub fn save(&self, path: &Path) -> Result<(), ManifestError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ManifestError::SaveFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
        }
        let content =
            serde_json::to_string_pretty(self).map_err(|e| ManifestError::SaveFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
        fs::write(path, content).map_err(|e| ManifestError::SaveFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }
}

/// UTC timestamp slug used in manifest and index directory names
pub fn timestamp_slug(at: DateTime<Utc>) -> String {
    at.format("%Y%m%d%H%M%S").to_string()
}

/// Manifest file name for a repository path and timestamp slug
///
/// The repository directory name is embedded with spaces replaced so that the
/// file name stays shell-friendly.
pub fn manifest_file_name(repo_path: &Path, slug: &str) -> String {
    let node_name = repo_path
        .file_name()
        .map(|n| n.to_string_lossy().replace(' ', "_"))
        .unwrap_or_else(|| "repo".to_string());
    format!("{node_name}-embeddings-{slug}.json")
}

/// Index directory name for a timestamp slug
pub fn index_dir_name(slug: &str) -> String {
    format!("index_{slug}")
}

fn is_manifest_file(name: &str) -> bool {
    name.contains("-embeddings-") && name.ends_with(".json")
}

fn is_index_dir(name: &str) -> bool {
    name.starts_with("index_")
}

/// List all manifests in the store directory, newest first by `created_at`
///
/// Unreadable manifests are skipped with a warning. A missing store directory
/// is treated as empty.
pub fn list_manifests(store_dir: &Path) -> Result<Vec<(PathBuf, EmbeddingManifest)>> {
    let mut manifests = Vec::new();

    if !store_dir.exists() {
        return Ok(manifests);
    }

    let entries = fs::read_dir(store_dir)
        .with_context(|| format!("Failed to read store directory {}", store_dir.display()))?;

    for entry in entries {
        let entry = entry.context("Failed to read store directory entry")?;
        let path = entry.path();
        let name = entry.file_name().to_string_lossy().to_string();

        if !path.is_file() || !is_manifest_file(&name) {
            continue;
        }

        match EmbeddingManifest::load(&path) {
            Ok(manifest) => manifests.push((path, manifest)),
            Err(e) => tracing::warn!("Failed to read {}: {}", name, e),
        }
    }

    manifests.sort_by(|a, b| b.1.created_at.cmp(&a.1.created_at));
    Ok(manifests)
}

/// Get the most recently created manifest
///
/// Recency is decided by the manifest's `created_at` field rather than by
/// file name ordering.
pub fn latest_manifest(store_dir: &Path) -> Result<(PathBuf, EmbeddingManifest)> {
    list_manifests(store_dir)?
        .into_iter()
        .next()
        .ok_or_else(|| ManifestError::NoEmbeddings.into())
}

/// Remove every manifest file and index directory under the store directory
pub fn cleanup(store_dir: &Path) -> Result<CleanupSummary> {
    let mut summary = CleanupSummary {
        manifests_deleted: Vec::new(),
        index_dirs_deleted: Vec::new(),
    };

    if !store_dir.exists() {
        return Ok(summary);
    }

    let entries = fs::read_dir(store_dir)
        .with_context(|| format!("Failed to read store directory {}", store_dir.display()))?;

    for entry in entries {
        let entry = entry.context("Failed to read store directory entry")?;
        let path = entry.path();
        let name = entry.file_name().to_string_lossy().to_string();

        if path.is_file() && is_manifest_file(&name) {
            fs::remove_file(&path)
                .with_context(|| format!("Failed to delete {}", path.display()))?;
            tracing::info!("Deleted {}", name);
            summary.manifests_deleted.push(path);
        } else if path.is_dir() && is_index_dir(&name) {
            fs::remove_dir_all(&path)
                .with_context(|| format!("Failed to delete directory {}", path.display()))?;
            tracing::info!("Deleted directory {}", name);
            summary.index_dirs_deleted.push(path);
        }
    }

    Ok(summary)
}
