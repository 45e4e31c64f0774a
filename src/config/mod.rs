//! Configuration management for memo.
//!
//! This module handles loading configuration from `~/.memo/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{ColorSetting, Config};
