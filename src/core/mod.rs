//! Core types for memo.

mod memo;

pub use memo::{label_of, Memo, MemoSummary};
