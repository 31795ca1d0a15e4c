//! LanceDB vector database client
//!
//! Each `prepare` run owns a fresh dataset directory; this client only ever
//! sees a directory path and the commit schema.

use crate::git::CommitRecord;
use crate::types::ScoredCommit;
use crate::vector_db::VectorDatabase;
use anyhow::{Context, Result};
use arrow_array::{
    FixedSizeListArray, Float32Array, RecordBatch, RecordBatchIterator, StringArray,
    types::Float32Type,
};
use arrow_schema::{DataType, Field, Schema};
use futures::stream::TryStreamExt;
use lancedb::Table;
use lancedb::connection::Connection;
use lancedb::query::{ExecutableQuery, QueryBase};
use std::sync::Arc;

const TABLE_NAME: &str = "commit_embeddings";

/// LanceDB vector database implementation (embedded, no server required)
pub struct LanceVectorDB {
    connection: Connection,
    db_path: String,
}

impl LanceVectorDB {
    /// Connect to (or create) a LanceDB dataset at the given directory
    pub async fn with_path(db_path: &str) -> Result<Self> {
        tracing::info!("Connecting to LanceDB at: {}", db_path);

        let connection = lancedb::connect(db_path)
            .execute()
            .await
            .context("Failed to connect to LanceDB")?;

        Ok(Self {
            connection,
            db_path: db_path.to_string(),
        })
    }

    /// Create schema for the commit embeddings table
    fn create_schema(dimension: usize) -> Arc<Schema> {
        Arc::new(Schema::new(vec![
            Field::new(
                "vector",
                DataType::FixedSizeList(
                    Arc::new(Field::new("item", DataType::Float32, true)),
                    dimension as i32,
                ),
                false,
            ),
            Field::new("sha", DataType::Utf8, false),
            Field::new("author", DataType::Utf8, false),
            Field::new("date", DataType::Utf8, false),
            Field::new("message", DataType::Utf8, false),
        ]))
    }

    async fn get_table(&self) -> Result<Table> {
        self.connection
            .open_table(TABLE_NAME)
            .execute()
            .await
            .context("Failed to open table")
    }

    /// Convert embeddings and commit records to a RecordBatch
    fn create_record_batch(
        embeddings: Vec<Vec<f32>>,
        records: &[CommitRecord],
        schema: Arc<Schema>,
    ) -> Result<RecordBatch> {
        let dimension = embeddings[0].len();

        let vector_array = FixedSizeListArray::from_iter_primitive::<Float32Type, _, _>(
            embeddings
                .into_iter()
                .map(|v| Some(v.into_iter().map(Some))),
            dimension as i32,
        );

        let sha_array =
            StringArray::from(records.iter().map(|r| r.sha.as_str()).collect::<Vec<_>>());
        let author_array =
            StringArray::from(records.iter().map(|r| r.author.as_str()).collect::<Vec<_>>());
        let date_array =
            StringArray::from(records.iter().map(|r| r.date.as_str()).collect::<Vec<_>>());
        let message_array =
            StringArray::from(records.iter().map(|r| r.message.as_str()).collect::<Vec<_>>());

        RecordBatch::try_new(
            schema,
            vec![
                Arc::new(vector_array),
                Arc::new(sha_array),
                Arc::new(author_array),
                Arc::new(date_array),
                Arc::new(message_array),
            ],
        )
        .context("Failed to create RecordBatch")
    }
}

#[async_trait::async_trait]
impl VectorDatabase for LanceVectorDB {
    async fn initialize(&self, dimension: usize) -> Result<()> {
        tracing::info!(
            "Initializing LanceDB with dimension {} at {}",
            dimension,
            self.db_path
        );

        let table_names = self
            .connection
            .table_names()
            .execute()
            .await
            .context("Failed to list tables")?;

        if table_names.contains(&TABLE_NAME.to_string()) {
            tracing::info!("Table '{}' already exists", TABLE_NAME);
            return Ok(());
        }

        let schema = Self::create_schema(dimension);
        let empty_batch = RecordBatch::new_empty(schema.clone());
        let batches =
            RecordBatchIterator::new(vec![empty_batch].into_iter().map(Ok), schema.clone());

        self.connection
            .create_table(TABLE_NAME, Box::new(batches))
            .execute()
            .await
            .context("Failed to create table")?;

        tracing::info!("Created table '{}'", TABLE_NAME);
        Ok(())
    }

    async fn store_commits(
        &self,
        embeddings: Vec<Vec<f32>>,
        records: &[CommitRecord],
    ) -> Result<usize> {
        if embeddings.is_empty() {
            return Ok(0);
        }
        anyhow::ensure!(
            embeddings.len() == records.len(),
            "embedding count {} does not match record count {}",
            embeddings.len(),
            records.len()
        );

        let dimension = embeddings[0].len();
        let schema = Self::create_schema(dimension);

        let batch = Self::create_record_batch(embeddings, records, schema.clone())?;
        let count = batch.num_rows();
        let batches = RecordBatchIterator::new(vec![batch].into_iter().map(Ok), schema);

        let table = self.get_table().await?;
        table
            .add(Box::new(batches))
            .execute()
            .await
            .context("Failed to add records to table")?;

        tracing::info!("Stored {} commit embeddings", count);
        Ok(count)
    }

    async fn search(&self, query_vector: Vec<f32>, limit: usize) -> Result<Vec<ScoredCommit>> {
        let table = self.get_table().await?;

        let stream = table
            .vector_search(query_vector)
            .context("Failed to create vector search")?
            .limit(limit)
            .execute()
            .await
            .context("Failed to execute search")?;

        let batches: Vec<RecordBatch> = stream
            .try_collect()
            .await
            .context("Failed to collect search results")?;

        let mut results = Vec::new();

        for batch in batches {
            let sha_array = batch
                .column_by_name("sha")
                .context("Missing sha column")?
                .as_any()
                .downcast_ref::<StringArray>()
                .context("Invalid sha type")?;

            let author_array = batch
                .column_by_name("author")
                .context("Missing author column")?
                .as_any()
                .downcast_ref::<StringArray>()
                .context("Invalid author type")?;

            let date_array = batch
                .column_by_name("date")
                .context("Missing date column")?
                .as_any()
                .downcast_ref::<StringArray>()
                .context("Invalid date type")?;

            let message_array = batch
                .column_by_name("message")
                .context("Missing message column")?
                .as_any()
                .downcast_ref::<StringArray>()
                .context("Invalid message type")?;

            let distance_array = batch
                .column_by_name("_distance")
                .context("Missing _distance column")?
                .as_any()
                .downcast_ref::<Float32Array>()
                .context("Invalid _distance type")?;

            for i in 0..batch.num_rows() {
                let distance = distance_array.value(i);
                let score = 1.0 / (1.0 + distance);

                results.push(ScoredCommit {
                    score,
                    sha: sha_array.value(i).to_string(),
                    author: author_array.value(i).to_string(),
                    date: date_array.value(i).to_string(),
                    message: message_array.value(i).to_string(),
                });
            }
        }

        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(sha: &str, message: &str) -> CommitRecord {
        CommitRecord {
            sha: sha.to_string(),
            author: "Test Author".to_string(),
            date: "Mon Jan 6 10:00:00 2025 +0000".to_string(),
            message: message.to_string(),
        }
    }

    #[tokio::test]
    async fn test_initialize_creates_table() {
        let dir = tempfile::tempdir().unwrap();
        let db = LanceVectorDB::with_path(dir.path().to_str().unwrap())
            .await
            .unwrap();
        db.initialize(4).await.unwrap();

        // Initializing again is a no-op
        db.initialize(4).await.unwrap();
    }

    #[tokio::test]
    async fn test_store_and_search_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let db = LanceVectorDB::with_path(dir.path().to_str().unwrap())
            .await
            .unwrap();
        db.initialize(4).await.unwrap();

        let embeddings = vec![
            vec![1.0, 0.0, 0.0, 0.0],
            vec![0.0, 1.0, 0.0, 0.0],
            vec![0.0, 0.0, 1.0, 0.0],
        ];
        let records = vec![
            record("sha-a", "Fix login bug"),
            record("sha-b", "Add search endpoint"),
            record("sha-c", "Bump dependencies"),
        ];

        let stored = db.store_commits(embeddings, &records).await.unwrap();
        assert_eq!(stored, 3);

        let results = db.search(vec![1.0, 0.0, 0.0, 0.0], 2).await.unwrap();
        assert_eq!(results.len(), 2);
        // Exact match comes back first with the maximum score
        assert_eq!(results[0].sha, "sha-a");
        assert_eq!(results[0].message, "Fix login bug");
        assert_eq!(results[0].author, "Test Author");
        assert!(results[0].score > results[1].score);
        assert!((results[0].score - 1.0).abs() < 1e-5);
    }

    #[tokio::test]
    async fn test_store_empty_batch() {
        let dir = tempfile::tempdir().unwrap();
        let db = LanceVectorDB::with_path(dir.path().to_str().unwrap())
            .await
            .unwrap();
        db.initialize(4).await.unwrap();

        let stored = db.store_commits(vec![], &[]).await.unwrap();
        assert_eq!(stored, 0);
    }

    #[tokio::test]
    async fn test_store_rejects_length_mismatch() {
        let dir = tempfile::tempdir().unwrap();
        let db = LanceVectorDB::with_path(dir.path().to_str().unwrap())
            .await
            .unwrap();
        db.initialize(4).await.unwrap();

        let result = db
            .store_commits(vec![vec![0.0; 4]], &[record("a", "m"), record("b", "m")])
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_search_limit_caps_results() {
        let dir = tempfile::tempdir().unwrap();
        let db = LanceVectorDB::with_path(dir.path().to_str().unwrap())
            .await
            .unwrap();
        db.initialize(2).await.unwrap();

        let embeddings: Vec<Vec<f32>> = (0..5).map(|i| vec![i as f32, 1.0]).collect();
        let records: Vec<CommitRecord> = (0..5)
            .map(|i| record(&format!("sha-{i}"), &format!("commit {i}")))
            .collect();
        db.store_commits(embeddings, &records).await.unwrap();

        let results = db.search(vec![0.0, 1.0], 3).await.unwrap();
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].sha, "sha-0");
    }
}
