//! Add command implementation.
//!
//! This module implements plain `memo`, which stores standard input as a new memo.

use std::io::Read;

use crate::error::MemoError;
use crate::output::format_added;
use crate::storage::Store;

/// Read memo content from `reader` until end of input.
///
/// # Errors
///
/// Returns `MemoError::Io` if reading fails or the input is not UTF-8.
pub fn read_content<R: Read>(mut reader: R) -> Result<String, MemoError> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    Ok(content)
}

/// Execute the add command.
///
/// # Errors
///
/// Returns `MemoError::EmptyContent` if the content is blank, or a storage
/// error if the insert fails.
pub fn add(store: &Store, content: &str) -> Result<String, MemoError> {
    let content = content.trim();
    tracing::debug!(content, "adding memo");

    let id = store.add(content)?;
    Ok(format_added(id))
}
