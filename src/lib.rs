//! memo - a tiny note-taking CLI
//!
//! This crate stores short text memos in a local `SQLite` database and lets
//! the user list them, or pick one interactively to read or delete.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod features;
pub mod output;
pub mod storage;

pub use cli::args::{Action, Cli, OutputFormat};
pub use crate::core::{Memo, MemoSummary};
pub use error::MemoError;
pub use storage::{with_store, Store, StoreLocation};
