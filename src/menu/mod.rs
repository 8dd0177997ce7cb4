//! Menu tree transformation stages
//!
//! A refactor run is strictly sequential:
//! 1. [`load_document`] reads and parses the JSON file
//! 2. [`relocate`] moves named root nodes under a destination node
//! 3. [`filter_fields`] strips every mapping down to a whitelist
//! 4. [`save_document`] overwrites the original file
//!
//! Documents are plain [`serde_json::Value`]s; object key order is kept
//! through the `preserve_order` feature.

pub mod filter;
pub mod loader;
pub mod persist;
pub mod relocate;

pub use filter::{filter_fields, FieldWhitelist, DEFAULT_ALLOWED_FIELDS};
pub use loader::{load_document, load_document_with_fs, parse_document, read_source_with_fs};
pub use persist::{render_document, save_document, save_document_with_fs, DEFAULT_INDENT};
pub use relocate::{relocate, RelocationOutcome, RelocationPlan};

/// Key holding the label used to identify menu nodes
pub const DISPLAY_NAME_KEY: &str = "displayName";

/// Key holding the nested child nodes
pub const CHILDREN_KEY: &str = "children";
