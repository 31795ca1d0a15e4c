use super::ChatModel;
use crate::types::ScoredCommit;
use anyhow::Result;

/// Persona and grounding instructions sent ahead of the commit context
const SYSTEM_PROMPT: &str = "You are a helpful Engineer who understands how development works \
and answers questions about git commit changes. You are concise, accurate, and explain all commit messages \
which are relevant to the question clearly using developer-friendly language and provide all relevant details \
including the commit hash, author, date, and message. Answer only based on the commit messages provided. \
If you don't know the answer, say so.";

/// Maximum characters of a commit message included in the context block
const MAX_MESSAGE_CHARS: usize = 100;

/// Turns retrieved commits into a single prompt and forwards it to a chat model
///
/// Stateless: one prompt per call, no retries, failures propagate.
pub struct Summarizer {
    model: Box<dyn ChatModel>,
}

impl Summarizer {
    /// Create a summarizer around a chat model
    pub fn new(model: Box<dyn ChatModel>) -> Self {
        Self { model }
    }

    /// Summarize search results as an answer to the original question
    pub async fn summarize(&self, results: &[ScoredCommit], question: &str) -> Result<String> {
        let prompt = build_prompt(&format_commits(results), question);
        let answer = self.model.complete(&prompt).await?;
        Ok(answer.trim().to_string())
    }
}

/// Format retrieved commits into the plain-text context block
pub fn format_commits(results: &[ScoredCommit]) -> String {
    let mut block = String::new();
    for commit in results {
        block.push_str(&format!(
            "-commit: {}: author: {}, date: {}, message: {}...\n",
            commit.sha,
            commit.author,
            commit.date,
            short_message(&commit.message),
        ));
    }
    block
}

/// Build the full prompt from the commit block and the question
pub fn build_prompt(commits: &str, question: &str) -> String {
    format!("{SYSTEM_PROMPT}\n\nCommit Messages:\n{commits}\n\nQuestion:\n{question}")
}

/// First line of a commit message, truncated to the context budget
///
/// Truncation respects char boundaries so multi-byte messages stay valid.
pub fn short_message(message: &str) -> &str {
    let first_line = message.lines().next().unwrap_or("");
    match first_line.char_indices().nth(MAX_MESSAGE_CHARS) {
        Some((idx, _)) => &first_line[..idx],
        None => first_line,
    }
}
