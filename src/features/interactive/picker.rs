//! Fuzzy picker implementation using skim.
//!
//! Provides an interactive terminal interface for selecting a memo by label.

use std::sync::Arc;

use skim::prelude::*;

use crate::core::MemoSummary;
use crate::error::MemoError;

/// What the user did with the selection prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// The user picked the entry with this memo ID.
    Chosen(i64),
    /// The user aborted the prompt.
    Cancelled,
}

/// Presents labeled memos and reports which one was picked.
///
/// Implementations must resolve the choice to the entry's ID, never by
/// matching label text, since labels are not unique.
#[cfg_attr(test, mockall::automock)]
pub trait Selector {
    /// Show `entries` under `prompt` and wait for a choice.
    ///
    /// # Errors
    ///
    /// Returns `MemoError::Prompt` if the prompt cannot be displayed.
    fn select(&mut self, prompt: &str, entries: &[MemoSummary]) -> Result<Selection, MemoError>;
}

/// Terminal selector backed by skim.
#[derive(Debug, Clone, Copy, Default)]
pub struct SkimSelector;

/// A wrapper around a memo entry that implements `SkimItem`.
struct MemoItem {
    id: String,
    label: String,
}

impl MemoItem {
    fn new(entry: &MemoSummary) -> Self {
        Self {
            id: entry.id.to_string(),
            label: entry.label.clone(),
        }
    }
}

impl SkimItem for MemoItem {
    fn text(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.label)
    }

    fn output(&self) -> Cow<'_, str> {
        // The ID travels through the prompt so duplicate labels stay distinct
        Cow::Borrowed(&self.id)
    }
}

impl Selector for SkimSelector {
    fn select(&mut self, prompt: &str, entries: &[MemoSummary]) -> Result<Selection, MemoError> {
        if entries.is_empty() {
            return Ok(Selection::Cancelled);
        }

        let prompt = format!("{prompt} > ");
        let header = "Enter: select | Ctrl-C/Esc: cancel";

        let skim_options = SkimOptionsBuilder::default()
            .height(Some("50%"))
            .multi(false)
            .prompt(Some(&prompt))
            .bind(vec!["ctrl-c:abort", "esc:abort", "enter:accept"])
            .header(Some(header))
            .build()
            .map_err(|e| MemoError::Prompt(format!("Invalid picker options: {e}")))?;

        let (tx, rx): (SkimItemSender, SkimItemReceiver) = unbounded();
        for entry in entries {
            let item: Arc<dyn SkimItem> = Arc::new(MemoItem::new(entry));
            let _ = tx.send(item);
        }
        drop(tx);

        let output = Skim::run_with(&skim_options, Some(rx))
            .ok_or_else(|| MemoError::Prompt("Failed to start the picker".to_string()))?;

        if output.is_abort {
            return Ok(Selection::Cancelled);
        }

        match output.selected_items.first() {
            None => Ok(Selection::Cancelled),
            Some(item) => item
                .output()
                .parse::<i64>()
                .map(Selection::Chosen)
                .map_err(|e| MemoError::Prompt(format!("Picker returned an invalid ID: {e}"))),
        }
    }
}
