//! The memo entity and its list projection.

use serde::{Deserialize, Serialize};

/// A single user-authored note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Memo {
    /// Identifier assigned by the store on insert.
    pub id: i64,
    /// Full content, possibly spanning several lines.
    pub content: String,
}

impl Memo {
    /// The first line of the content.
    #[must_use]
    pub fn label(&self) -> &str {
        label_of(&self.content)
    }

    /// Project this memo into a list entry.
    #[must_use]
    pub fn summary(&self) -> MemoSummary {
        MemoSummary {
            id: self.id,
            label: self.label().to_string(),
        }
    }
}

/// One entry of a memo listing: the id plus the display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoSummary {
    pub id: i64,
    pub label: String,
}

/// Extract the display label (first line) from memo content.
#[must_use]
pub fn label_of(content: &str) -> &str {
    content.lines().next().unwrap_or("")
}
