//! Serializing menu documents back to disk

use crate::error::MenuRefactorError;
use crate::infra::{FileSystem, RealFileSystem};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value;
use std::path::Path;

/// Default number of spaces per indentation level
pub const DEFAULT_INDENT: usize = 4;

/// Render `doc` as pretty-printed JSON
///
/// Non-ASCII text is written literally, and no trailing newline is added.
///
/// # Examples
///
/// ```
/// use menu_refactor::menu::render_document;
/// use serde_json::json;
///
/// let text = render_document(&json!([{"displayName": "驾驶舱"}]), 4).unwrap();
/// assert_eq!(text, "[\n    {\n        \"displayName\": \"驾驶舱\"\n    }\n]");
/// ```
pub fn render_document(doc: &Value, indent: usize) -> serde_json::Result<String> {
    let indent = " ".repeat(indent);
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    doc.serialize(&mut serializer)?;
    // serde_json only ever emits valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Overwrite `path` with the rendered document
///
/// The file is replaced in a single write; there is no temporary file or
/// rename, so a failure part way through can leave it truncated.
///
/// # Errors
///
/// Returns [`MenuRefactorError::Write`] on any I/O failure.
pub fn save_document(path: &Path, doc: &Value, indent: usize) -> Result<(), MenuRefactorError> {
    save_document_with_fs(path, doc, indent, &RealFileSystem)
}

/// Save a document with a custom filesystem implementation
pub fn save_document_with_fs<FS: FileSystem>(
    path: &Path,
    doc: &Value,
    indent: usize,
    fs: &FS,
) -> Result<(), MenuRefactorError> {
    let contents = render_document(doc, indent).map_err(|e| MenuRefactorError::Write {
        path: path.to_path_buf(),
        source: e.into(),
    })?;

    fs.write(path, &contents)
        .map_err(|source| MenuRefactorError::Write {
            path: path.to_path_buf(),
            source,
        })?;

    log::debug!("wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}
