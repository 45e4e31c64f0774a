//! Interactive selection of memos.
//!
//! This module provides a skim-based picker and the read/delete workflows
//! that run on top of it.

mod picker;
mod workflow;

#[cfg(test)]
pub use picker::MockSelector;
pub use picker::{Selection, Selector, SkimSelector};
pub use workflow::{
    delete_memo, read_memo, DeleteOutcome, ReadOutcome, DELETE_PROMPT, READ_PROMPT,
};
