//! Common test utilities and helpers
//!
//! Shared fixtures for the CLI and workflow integration tests.

pub mod fixtures;

use assert_cmd::Command;
use std::path::Path;

/// Build a menu-refactor command running inside `dir`
///
/// Running inside the fixture directory keeps a developer's own
/// `.menu-refactor.toml` out of the test.
#[allow(dead_code)]
pub fn bin_in(dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_menu-refactor"));
    cmd.current_dir(dir).env_remove("RUST_LOG");
    cmd
}
