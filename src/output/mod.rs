//! Output formatting for memo.
//!
//! This module provides formatters for displaying memos in various formats.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::core::{Memo, MemoSummary};
use crate::error::MemoError;

pub use json::*;
pub use pretty::*;

/// Format a memo listing based on output format
///
/// # Errors
///
/// Returns `MemoError::Parse` if JSON serialization fails.
pub fn format_memo_list(
    entries: &[MemoSummary],
    format: OutputFormat,
) -> Result<String, MemoError> {
    match format {
        OutputFormat::Pretty => Ok(format_memo_list_pretty(entries)),
        OutputFormat::Json => format_memo_list_json(entries),
    }
}

/// Format a single memo based on output format
///
/// # Errors
///
/// Returns `MemoError::Parse` if JSON serialization fails.
pub fn format_memo(memo: &Memo, format: OutputFormat) -> Result<String, MemoError> {
    match format {
        OutputFormat::Pretty => Ok(format_memo_pretty(memo)),
        OutputFormat::Json => format_memo_json(memo),
    }
}
