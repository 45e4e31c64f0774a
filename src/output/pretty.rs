use colored::Colorize;

use crate::core::{Memo, MemoSummary};

/// Format a memo listing as one label per line
pub fn format_memo_list_pretty(entries: &[MemoSummary]) -> String {
    entries
        .iter()
        .map(|entry| entry.label.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a single memo as its full content
pub fn format_memo_pretty(memo: &Memo) -> String {
    memo.content.clone()
}

/// Confirmation printed after a memo is stored
pub fn format_added(id: i64) -> String {
    format!("{} (ID: {id})", "Memo added".green())
}

/// Confirmation printed after a memo is removed
pub fn format_deleted(entry: &MemoSummary) -> String {
    format!("{} {}", "Memo deleted:".green(), entry.label.bold())
}

/// Message printed when a chosen memo no longer exists
pub fn format_not_found(id: i64) -> String {
    format!("{} (ID: {id})", "Memo not found.".yellow())
}
