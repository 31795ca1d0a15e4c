// LanceDB is the embedded vector database backing every index directory
pub mod lance_client;
pub use lance_client::LanceVectorDB;

use crate::git::CommitRecord;
use crate::types::ScoredCommit;
use anyhow::Result;

/// Trait for vector database operations
#[async_trait::async_trait]
pub trait VectorDatabase: Send + Sync {
    /// Initialize the database and create the table if needed
    async fn initialize(&self, dimension: usize) -> Result<()>;

    /// Store commit embeddings with sha/author/date/message passthrough metadata
    async fn store_commits(
        &self,
        embeddings: Vec<Vec<f32>>,
        records: &[CommitRecord],
    ) -> Result<usize>;

    /// Search for the commits closest to a query vector
    async fn search(&self, query_vector: Vec<f32>, limit: usize) -> Result<Vec<ScoredCommit>>;
}
