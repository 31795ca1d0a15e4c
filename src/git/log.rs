use crate::error::GitError;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Field separator used in the git log pretty format (%x1f)
const FIELD_SEP: char = '\u{1f}';
/// Record separator terminating each log entry (%x1e)
const RECORD_SEP: char = '\u{1e}';

/// A single commit extracted from the git log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    /// Full commit SHA hash
    pub sha: String,
    /// Author's name
    pub author: String,
    /// Author date as formatted by git
    pub date: String,
    /// Commit subject line
    pub message: String,
}

/// Handle on a git repository for commit extraction
pub struct GitRepo {
    path: PathBuf,
}

impl GitRepo {
    /// Open a repository at the given path
    ///
    /// Fails when the path has no `.git` entry (directory or worktree file).
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, GitError> {
        let path = path.as_ref();
        if !path.join(".git").exists() {
            return Err(GitError::RepoNotFound(path.display().to_string()));
        }
        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    /// Get the repository path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the current branch name via `git rev-parse --abbrev-ref HEAD`
    pub fn current_branch(&self) -> Result<String, GitError> {
        let output = self.run_git(&["rev-parse", "--abbrev-ref", "HEAD"])?;
        Ok(output.trim().to_string())
    }

    /// Extract commit records from the log, newest first
    ///
    /// Uses unit separators between fields and a record separator between
    /// entries so that commit subjects containing punctuation parse cleanly.
    pub fn extract_commits(&self) -> Result<Vec<CommitRecord>, GitError> {
        let raw = self.run_git(&["log", "--pretty=format:%H%x1f%an%x1f%ad%x1f%s%x1e"])?;
        let commits = parse_log(&raw);
        tracing::info!("Extracted {} commits from {}", commits.len(), self.path.display());
        Ok(commits)
    }

    fn run_git(&self, args: &[&str]) -> Result<String, GitError> {
        let mut cmd = Command::new("git");
        cmd.arg("-C").arg(&self.path).args(args);
        tracing::debug!("Running git {:?} in {}", args, self.path.display());

        let output = cmd
            .output()
            .map_err(|e| GitError::CommandFailed(e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(GitError::CommandFailed(stderr.trim().to_string()));
        }

        String::from_utf8(output.stdout).map_err(|_| GitError::InvalidOutput)
    }
}

/// Parse raw git log output into commit records
///
/// Each record must split into exactly four fields (sha, author, date,
/// message); malformed entries are skipped with a warning.
pub fn parse_log(raw: &str) -> Vec<CommitRecord> {
    let mut commits = Vec::new();

    for entry in raw.split(RECORD_SEP) {
        let entry = entry.trim_matches(['\n', '\r']);
        if entry.trim().is_empty() {
            continue;
        }

        let parts: Vec<&str> = entry.split(FIELD_SEP).collect();
        if parts.len() != 4 {
            tracing::warn!("Skipping malformed log entry: {:?}", parts);
            continue;
        }

        commits.push(CommitRecord {
            sha: parts[0].to_string(),
            author: parts[1].to_string(),
            date: parts[2].to_string(),
            message: parts[3].to_string(),
        });
    }

    commits
}
