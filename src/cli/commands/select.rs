//! Interactive read and delete commands.
//!
//! This module implements `memo -r` and `memo -d`.

use colored::Colorize;

use crate::cli::args::OutputFormat;
use crate::error::MemoError;
use crate::features::interactive::{delete_memo, read_memo, DeleteOutcome, ReadOutcome, Selector};
use crate::output::{
    format_deleted, format_memo, format_not_found, format_outcome_json, OutcomeJson,
};
use crate::storage::Store;

const NO_MEMOS: &str = "No memos found.";
const CANCELLED: &str = "Selection cancelled.";

fn empty(format: OutputFormat) -> Result<String, MemoError> {
    match format {
        OutputFormat::Json => format_outcome_json(&OutcomeJson::status("empty")),
        OutputFormat::Pretty => Ok(NO_MEMOS.to_string()),
    }
}

fn cancelled(format: OutputFormat) -> Result<String, MemoError> {
    match format {
        OutputFormat::Json => format_outcome_json(&OutcomeJson::status("cancelled")),
        OutputFormat::Pretty => Ok(CANCELLED.dimmed().to_string()),
    }
}

fn not_found(id: i64, format: OutputFormat) -> Result<String, MemoError> {
    match format {
        OutputFormat::Json => format_outcome_json(&OutcomeJson {
            id: Some(id),
            ..OutcomeJson::status("not_found")
        }),
        OutputFormat::Pretty => Ok(format_not_found(id)),
    }
}

/// Execute the read command.
///
/// # Errors
///
/// Returns an error if the store or the prompt fails.
pub fn read(
    store: &Store,
    selector: &mut dyn Selector,
    format: OutputFormat,
) -> Result<String, MemoError> {
    match read_memo(store, selector)? {
        ReadOutcome::Empty => empty(format),
        ReadOutcome::Cancelled => cancelled(format),
        ReadOutcome::NotFound(id) => not_found(id, format),
        ReadOutcome::Shown(memo) => format_memo(&memo, format),
    }
}

/// Execute the delete command.
///
/// # Errors
///
/// Returns an error if the store or the prompt fails.
pub fn delete(
    store: &Store,
    selector: &mut dyn Selector,
    format: OutputFormat,
) -> Result<String, MemoError> {
    match delete_memo(store, selector)? {
        DeleteOutcome::Empty => empty(format),
        DeleteOutcome::Cancelled => cancelled(format),
        DeleteOutcome::NotFound(id) => not_found(id, format),
        DeleteOutcome::Deleted(entry) => match format {
            OutputFormat::Json => format_outcome_json(&OutcomeJson {
                id: Some(entry.id),
                label: Some(entry.label.as_str()),
                ..OutcomeJson::status("deleted")
            }),
            OutputFormat::Pretty => Ok(format_deleted(&entry)),
        },
    }
}
