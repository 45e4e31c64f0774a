//! Error types for memo.

use thiserror::Error;

/// Errors that can occur while running memo.
#[derive(Error, Debug)]
pub enum MemoError {
    /// The database could not be opened, queried, or was already closed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Memo content was empty after trimming.
    #[error("Memo content is empty")]
    EmptyContent,

    /// Configuration could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The interactive prompt failed to run.
    #[error("Prompt error: {0}")]
    Prompt(String),

    /// JSON serialization failed.
    #[error("Failed to format output: {0}")]
    Parse(#[from] serde_json::Error),

    /// Reading input failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl MemoError {
    /// Storage error for an operation attempted after `close()`.
    #[must_use]
    pub fn closed() -> Self {
        Self::Storage("connection closed".to_string())
    }
}
