//! JSON output formatting for memo.

use serde::Serialize;
use serde_json::json;

use crate::core::{Memo, MemoSummary};
use crate::error::MemoError;

/// Format a memo listing as JSON
///
/// # Errors
///
/// Returns `MemoError::Parse` if JSON serialization fails.
pub fn format_memo_list_json(entries: &[MemoSummary]) -> Result<String, MemoError> {
    let output = json!({
        "count": entries.len(),
        "items": entries
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format a single memo as JSON
///
/// # Errors
///
/// Returns `MemoError::Parse` if JSON serialization fails.
pub fn format_memo_json(memo: &Memo) -> Result<String, MemoError> {
    let output = json!({
        "id": memo.id,
        "label": memo.label(),
        "content": memo.content
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Outcome of an interactive read or delete, for JSON output.
#[derive(Debug, Serialize)]
pub struct OutcomeJson<'a> {
    /// `empty`, `cancelled`, `not_found` or `deleted`.
    pub status: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<&'a str>,
}

impl<'a> OutcomeJson<'a> {
    /// An outcome that refers to no particular memo.
    #[must_use]
    pub const fn status(status: &'a str) -> Self {
        Self {
            status,
            id: None,
            label: None,
        }
    }
}

/// Format a workflow outcome as JSON
///
/// # Errors
///
/// Returns `MemoError::Parse` if JSON serialization fails.
pub fn format_outcome_json(outcome: &OutcomeJson<'_>) -> Result<String, MemoError> {
    Ok(serde_json::to_string_pretty(outcome)?)
}
