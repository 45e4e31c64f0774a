//! Storage layer for memo.
//!
//! This module provides `SQLite`-based persistence for memos.

mod database;
mod schema;

pub use database::{with_store, Store, StoreLocation};
