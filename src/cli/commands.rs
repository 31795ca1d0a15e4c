use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::client::RecallClient;
use crate::config::Config;
use crate::llm::short_message;
use crate::types::SearchParams;

#[derive(Parser)]
#[command(name = "git-recall")]
#[command(version)]
#[command(about = "Semantic search over git commit history", long_about = None)]
pub struct Cli {
    /// Directory holding embedding manifests and index directories
    #[arg(long, global = true, env = "GIT_RECALL_STORE_DIR")]
    pub store_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract commits, generate embeddings, and index them for future searches
    Prepare {
        /// Path to the Git project folder
        folder: PathBuf,

        /// Embedding provider: hf or openai
        #[arg(short, long)]
        provider: Option<String>,

        /// Embedding model (e.g. BAAI/bge-small-en-v1.5 or text-embedding-3-small)
        #[arg(short, long)]
        model: Option<String>,
    },

    /// List all available embeddings, newest first, with their metadata
    ListEmbeddings,

    /// Search the latest embedding for a query and optionally summarize via LLM
    Search {
        /// Query string (max 200 chars)
        query: String,

        /// Embedding provider: hf or openai
        #[arg(short, long)]
        provider: Option<String>,

        /// Embedding model (must match the one used by prepare)
        #[arg(short, long)]
        model: Option<String>,

        /// Use LLM to summarize results
        #[arg(short, long)]
        summarize: bool,

        /// LLM provider for summarization
        #[arg(long)]
        llm_provider: Option<String>,

        /// LLM model for summarization
        #[arg(long)]
        llm_model: Option<String>,

        /// Max number of results to return
        #[arg(short = 'k', long = "limit")]
        limit: Option<usize>,
    },

    /// Remove all embedding manifests and index directories created by this tool
    Cleanup,
}

/// Parse arguments and dispatch to the matching operation
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::new()?;
    if let Some(store_dir) = cli.store_dir {
        config.store.store_dir = store_dir;
    }
    let client = RecallClient::with_config(config);

    match cli.command {
        Commands::Prepare {
            folder,
            provider,
            model,
        } => {
            let provider = provider.unwrap_or_else(|| client.config().embedding.provider.clone());
            let model = model.unwrap_or_else(|| client.config().embedding.model.clone());

            println!(
                "Preparing embeddings for {} (provider: {}, model: {})",
                folder.display(),
                provider,
                model
            );
            let summary = client.prepare(&folder, &provider, &model).await?;
            println!(
                "Indexed {} commits from branch {} in {} ms",
                summary.doc_count, summary.branch, summary.duration_ms
            );
            println!(
                "Embeddings indexed and stored in {}",
                summary.manifest_path.display()
            );
        }

        Commands::ListEmbeddings => {
            for (path, manifest) in client.list_embeddings()? {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_else(|| path.display().to_string());
                println!("\nEmbeddings metadata from {}:", name);
                println!("  Branch      : {}", manifest.branch);
                println!("  Created at  : {}", manifest.created_at.to_rfc3339());
                println!("  Provider    : {}", manifest.provider);
                println!("  Doc count   : {}", manifest.doc_count);
                println!("  Index dir   : {}", manifest.index_dir.display());
            }
        }

        Commands::Search {
            query,
            provider,
            model,
            summarize,
            llm_provider,
            llm_model,
            limit,
        } => {
            let params = SearchParams {
                query,
                provider: provider.unwrap_or_else(|| client.config().embedding.provider.clone()),
                model: model.unwrap_or_else(|| client.config().embedding.model.clone()),
                limit: limit.unwrap_or(client.config().search.limit),
                summarize,
                llm_provider: llm_provider.unwrap_or_else(|| client.config().llm.provider.clone()),
                llm_model: llm_model.unwrap_or_else(|| client.config().llm.model.clone()),
            };

            let outcome = client.search(params).await?;

            println!("Top {} matching commits:", outcome.results.len());
            for commit in &outcome.results {
                println!(
                    "- {}: {} on {}: {}...",
                    commit.sha,
                    commit.author,
                    commit.date,
                    short_message(&commit.message)
                );
            }

            if let Some(answer) = outcome.answer {
                println!("\nLLM Answer:");
                println!("{}", answer);
            }
        }

        Commands::Cleanup => {
            let summary = client.cleanup()?;
            for path in &summary.manifests_deleted {
                if let Some(name) = path.file_name() {
                    println!("Deleted {}", name.to_string_lossy());
                }
            }
            for path in &summary.index_dirs_deleted {
                if let Some(name) = path.file_name() {
                    println!("Deleted directory {}", name.to_string_lossy());
                }
            }
            println!("Cleanup complete.");
        }
    }

    Ok(())
}
