//! Path resolution for memo configuration and data files.
//!
//! All memo data is stored in `~/.memo/`:
//! - `config.yaml` - Main configuration file
//! - `memo.db` - SQLite database holding the memos

use std::path::PathBuf;

use crate::error::MemoError;

/// Paths to memo configuration and data files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.memo/`
    pub root: PathBuf,
    /// Config file: `~/.memo/config.yaml`
    pub config_file: PathBuf,
    /// Database file: `~/.memo/memo.db`
    pub database: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, MemoError> {
        let home = std::env::var("HOME")
            .map_err(|_| MemoError::Config("Could not determine home directory".to_string()))?;

        Ok(Self::with_root(PathBuf::from(home).join(".memo")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            database: root.join("memo.db"),
            root,
        }
    }

    /// Ensure the root directory exists, creating it if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), MemoError> {
        if !self.root.exists() {
            std::fs::create_dir_all(&self.root).map_err(|e| {
                MemoError::Config(format!(
                    "Failed to create directory {}: {e}",
                    self.root.display()
                ))
            })?;
        }

        Ok(())
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::new().unwrap_or_else(|_| {
            // Fall back to the working directory, like a bare `./memo.db`
            Self::with_root(PathBuf::from(".memo"))
        })
    }
}
