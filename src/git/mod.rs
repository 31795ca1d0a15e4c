//! Git repository operations for semantic search over commit history
//!
//! Shells out to `git` to extract commit metadata and messages, which are
//! the units indexed for vector search.

/// Commit log extraction and parsing
pub mod log;

pub use log::{CommitRecord, GitRepo};
