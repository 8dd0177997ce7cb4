//! Configuration for menu-refactor
//!
//! This module provides:
//! - The `.menu-refactor.toml` file structure and its defaults
//! - Loading from the working directory or an explicit path
//! - Validation of relocation labels, allowed fields and indentation

pub mod file;
pub mod loader;

pub use file::{RefactorConfig, CONFIG_FILE_NAME, MAX_INDENT};
pub use loader::ConfigLoader;
