//! Command handlers for the menu-refactor CLI
//!
//! `refactor` holds the presentation layer and `workflow` the
//! load/relocate/filter/save orchestration behind it.

pub mod refactor;
pub mod workflow;

pub use refactor::{cmd_refactor, RefactorOptions, DEFAULT_MENU_FILE};
pub use workflow::{RefactorMode, RefactorResult, RefactorWorkflow};
