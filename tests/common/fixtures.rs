//! Menu document fixtures
//!
//! Provides realistic menu files in temporary directories.

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Menu where both source nodes and the destination sit at the root
pub const MENU_WITH_TARGETS: &str = r#"[{"displayName":"驾驶舱","id":"1","extra":"x"},{"displayName":"能源监视","id":"2"},{"displayName":"智能能源管理","id":"3","children":[{"displayName":"Old","id":"4"}]}]"#;

/// Expected file content after refactoring [`MENU_WITH_TARGETS`]
pub const MENU_WITH_TARGETS_REFACTORED: &str = r#"[
    {
        "displayName": "智能能源管理",
        "id": "3",
        "children": [
            {
                "displayName": "驾驶舱",
                "id": "1"
            },
            {
                "displayName": "能源监视",
                "id": "2"
            },
            {
                "displayName": "Old",
                "id": "4"
            }
        ]
    }
]"#;

/// Menu missing the second source node
pub const MENU_WITHOUT_MONITOR: &str = r#"[
    {"displayName": "驾驶舱", "id": "1", "permission": "view"},
    {"displayName": "智能能源管理", "id": "3"}
]"#;

/// Menu whose root is a single object
pub const OBJECT_ROOT_MENU: &str =
    r#"{"displayName": "Home", "id": "0", "component": "Layout", "children": [{"id": "1", "sort": 2}]}"#;

/// Write `content` to `file_name` inside a fresh temporary directory
///
/// # Returns
///
/// A tuple of (TempDir, path to the file) - the TempDir must be kept alive
pub fn menu_file(file_name: &str, content: &str) -> anyhow::Result<(TempDir, PathBuf)> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join(file_name);
    fs::write(&path, content)?;
    Ok((temp_dir, path))
}

/// Write a `.menu-refactor.toml` into `dir`
pub fn write_config(dir: &TempDir, content: &str) -> anyhow::Result<PathBuf> {
    let path = dir.path().join(".menu-refactor.toml");
    fs::write(&path, content)?;
    Ok(path)
}
