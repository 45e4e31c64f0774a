//! Command-line interface for memo.

pub mod args;
pub mod commands;
