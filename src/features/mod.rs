//! Feature implementations for memo.
//!
//! - Interactive picker and the read/delete workflows built on it

pub mod interactive;
