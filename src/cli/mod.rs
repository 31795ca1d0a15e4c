//! Command-line interface for git-recall

mod commands;

pub use commands::{Cli, Commands, run};
