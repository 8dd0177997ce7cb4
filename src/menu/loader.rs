//! Reading menu documents from disk

use crate::error::MenuRefactorError;
use crate::infra::{FileSystem, RealFileSystem};
use serde_json::Value;
use std::io;
use std::path::Path;

/// Read and parse the JSON document at `path`
///
/// No shape is enforced: the root may be an array, an object or a scalar.
///
/// # Errors
///
/// - [`MenuRefactorError::NotFound`] if the file does not exist
/// - [`MenuRefactorError::Read`] for any other I/O failure
/// - [`MenuRefactorError::Parse`] if the content is not well-formed JSON
pub fn load_document(path: &Path) -> Result<Value, MenuRefactorError> {
    load_document_with_fs(path, &RealFileSystem)
}

/// Load a document with a custom filesystem implementation
pub fn load_document_with_fs<FS: FileSystem>(
    path: &Path,
    fs: &FS,
) -> Result<Value, MenuRefactorError> {
    let contents = read_source_with_fs(path, fs)?;
    parse_document(&contents, path)
}

/// Read the raw text of a menu file
pub fn read_source_with_fs<FS: FileSystem>(
    path: &Path,
    fs: &FS,
) -> Result<String, MenuRefactorError> {
    // Read directly and map NotFound, no exists() pre-check
    let contents = fs.read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => MenuRefactorError::NotFound {
            path: path.to_path_buf(),
        },
        _ => MenuRefactorError::Read {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    log::debug!("read {} bytes from {}", contents.len(), path.display());
    Ok(contents)
}

/// Parse menu file text; `path` is only used for error reporting
pub fn parse_document(contents: &str, path: &Path) -> Result<Value, MenuRefactorError> {
    serde_json::from_str(contents).map_err(|source| MenuRefactorError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
