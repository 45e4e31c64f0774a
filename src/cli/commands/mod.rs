//! Command implementations for memo.
//!
//! This module contains the implementation of all CLI commands.

mod add;
mod select;

pub use add::{add, read_content};
pub use select::{delete, read};

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::{Cli, OutputFormat};
use crate::error::MemoError;
use crate::output::format_memo_list;
use crate::storage::Store;

/// Execute the list command
///
/// # Errors
///
/// Returns an error if the store query or output formatting fails.
pub fn list(store: &Store, format: OutputFormat) -> Result<String, MemoError> {
    let entries = store.list()?;
    format_memo_list(&entries, format)
}

/// Generate a shell completion script
///
/// # Errors
///
/// Returns `MemoError::Io` if the generated script is not valid UTF-8.
pub fn completions(shell: Shell) -> Result<String, MemoError> {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, "memo", &mut buf);
    String::from_utf8(buf)
        .map_err(|e| MemoError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}
