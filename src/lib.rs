#![warn(missing_docs)]
#![warn(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! menu-refactor library
//!
//! Restructures a navigation menu JSON document: named root nodes are moved
//! under a destination node, and every node is stripped down to a whitelist
//! of fields. It can be used programmatically in addition to the CLI.
//!
//! # Basic Example
//!
//! ```
//! use menu_refactor::menu::{filter_fields, relocate, FieldWhitelist, RelocationPlan};
//! use serde_json::json;
//!
//! let doc = json!([
//!     {"displayName": "驾驶舱", "id": "1", "extra": "x"},
//!     {"displayName": "能源监视", "id": "2"},
//!     {"displayName": "智能能源管理", "id": "3", "children": [{"displayName": "Old", "id": "4"}]}
//! ]);
//!
//! let (doc, outcome) = relocate(doc, &RelocationPlan::default());
//! assert!(outcome.is_moved());
//!
//! let doc = filter_fields(&doc, &FieldWhitelist::default());
//! assert_eq!(doc, json!([{
//!     "displayName": "智能能源管理",
//!     "id": "3",
//!     "children": [
//!         {"displayName": "驾驶舱", "id": "1"},
//!         {"displayName": "能源监视", "id": "2"},
//!         {"displayName": "Old", "id": "4"}
//!     ]
//! }]));
//! ```
//!
//! # Advanced Example: Backup Before Rewriting
//!
//! ```
//! use menu_refactor::cmd::workflow::{RefactorMode, RefactorWorkflow};
//! use menu_refactor::config::RefactorConfig;
//! use std::fs;
//! use tempfile::TempDir;
//!
//! let workspace = TempDir::new().unwrap();
//! let menu = workspace.path().join("a.json");
//! fs::write(&menu, r#"[{"id": "1", "extra": true}]"#).unwrap();
//!
//! let workflow = RefactorWorkflow::new(&menu, RefactorConfig::default());
//! let result = workflow.execute(RefactorMode::Write { backup: true }).unwrap();
//!
//! let backup = result.backup_path.unwrap();
//! assert!(fs::read_to_string(&backup).unwrap().contains("extra"));
//! assert!(!fs::read_to_string(&menu).unwrap().contains("extra"));
//! ```

/// Timestamped backups of menu files
pub mod backup;
/// Command handlers for CLI operations
pub mod cmd;
/// Configuration file loading and validation
pub mod config;
/// Error types with contextual suggestions
pub mod error;
/// Shared console output symbols
pub mod fmt;
/// Infrastructure traits for filesystem access
pub mod infra;
/// Menu tree loading, relocation, filtering and saving
pub mod menu;
