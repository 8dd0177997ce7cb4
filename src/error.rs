//! Error types with contextual suggestions
//!
//! Every failure of a refactor run maps onto [`MenuRefactorError`], which carries:
//! - An actionable message
//! - A suggested fix, when one exists
//! - A sysexits-style exit code for scripts and CI
//!
//! # Examples
//!
//! ```no_run
//! use menu_refactor::menu::load_document;
//! use std::path::Path;
//!
//! match load_document(Path::new("a.json")) {
//!     Ok(doc) => println!("loaded {} bytes of JSON", doc.to_string().len()),
//!     Err(e) => {
//!         eprintln!("{}", e);
//!         std::process::exit(e.exit_code());
//!     }
//! }
//! ```

use crate::backup::BackupError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading, transforming or saving a menu document
#[derive(Error, Debug)]
pub enum MenuRefactorError {
    /// Target menu file does not exist
    #[error("File {} not found", path.display())]
    NotFound {
        /// Path that was requested
        path: PathBuf,
    },

    /// Target menu file exists but could not be read
    #[error("Failed to read {}", path.display())]
    Read {
        /// Path being read
        path: PathBuf,
        #[source]
        /// IO error source
        source: std::io::Error,
    },

    /// Menu file content is not well-formed JSON
    #[error("Error decoding JSON in {}", path.display())]
    Parse {
        /// Path being parsed
        path: PathBuf,
        #[source]
        /// Decoder error with line and column
        source: serde_json::Error,
    },

    /// Writing the transformed document failed
    #[error("Error writing file {}", path.display())]
    Write {
        /// Path being written
        path: PathBuf,
        #[source]
        /// IO error source
        source: std::io::Error,
    },

    /// `--backup` could not save a copy of the original
    #[error("Failed to back up {}", path.display())]
    Backup {
        /// Menu file being backed up
        path: PathBuf,
        #[source]
        /// What went wrong while copying
        source: BackupError,
    },

    /// Explicitly requested configuration file is missing
    #[error("Configuration file not found: {}", path.display())]
    ConfigNotFound {
        /// Path to config file
        path: PathBuf,
        #[source]
        /// IO error source
        source: std::io::Error,
    },

    /// Configuration values are inconsistent
    #[error("Invalid configuration: {reason}")]
    InvalidConfig {
        /// What is wrong with the configuration
        reason: String,
    },

    /// `--check` found that the file is not yet normalized
    #[error("{} would be changed by refactoring", path.display())]
    WouldChange {
        /// Path that would be rewritten
        path: PathBuf,
    },
}

impl MenuRefactorError {
    /// Get actionable suggestion for resolving this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use menu_refactor::error::MenuRefactorError;
    /// use std::path::PathBuf;
    ///
    /// let error = MenuRefactorError::NotFound { path: PathBuf::from("menus.json") };
    /// assert!(error.suggestion().unwrap().contains("menus.json"));
    /// ```
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::NotFound { path } => Some(format!(
                "Pass the menu file explicitly: menu-refactor <path/to/menu.json> (looked for {})",
                path.display()
            )),
            Self::Read { path, .. } | Self::Write { path, .. } => Some(format!(
                "Check file permissions and that {} is accessible",
                path.display()
            )),
            Self::Backup { .. } => Some(
                "Check that the .menu-refactor directory is writable, or run without --backup"
                    .to_string(),
            ),
            Self::Parse { .. } => {
                Some("Fix the JSON syntax at the reported line and column, then re-run".to_string())
            }
            Self::ConfigNotFound { .. } => Some(
                "Omit --config to use defaults, or create the file with a [relocation] table"
                    .to_string(),
            ),
            Self::InvalidConfig { .. } => {
                Some("Edit .menu-refactor.toml and correct the reported value".to_string())
            }
            Self::WouldChange { path } => Some(format!(
                "Run 'menu-refactor {}' without --check to apply the changes",
                path.display()
            )),
        }
    }

    /// Get appropriate exit code for this error, following sysexits.h conventions.
    ///
    /// # Examples
    ///
    /// ```
    /// use menu_refactor::error::MenuRefactorError;
    /// use std::path::PathBuf;
    ///
    /// let error = MenuRefactorError::NotFound { path: PathBuf::from("a.json") };
    /// assert_eq!(error.exit_code(), 66); // EX_NOINPUT
    /// ```
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NotFound { .. } => 66,        // EX_NOINPUT
            Self::Parse { .. } => 65,           // EX_DATAERR
            Self::Read { .. } => 74,            // EX_IOERR
            Self::Write { .. } => 74,           // EX_IOERR
            Self::Backup { .. } => 73,          // EX_CANTCREAT
            Self::ConfigNotFound { .. } => 78,  // EX_CONFIG
            Self::InvalidConfig { .. } => 78,   // EX_CONFIG
            Self::WouldChange { .. } => 1,      // CI should fail
        }
    }
}

/// Error formatter with colors and structured output
pub struct ErrorFormatter;

impl ErrorFormatter {
    /// Format error with its cause chain and suggestion
    pub fn format(error: &anyhow::Error) -> String {
        use console::style;

        let mut output = String::new();

        output.push_str(&format!("{} {}\n", style("error:").red().bold(), error));

        let mut source = error.source();
        let mut indent = 1;
        while let Some(err) = source {
            output.push_str(&format!(
                "{}{} {}\n",
                "  ".repeat(indent),
                style("caused by:").yellow(),
                err
            ));
            source = err.source();
            indent += 1;
        }

        if let Some(suggestion) = Self::find(error).and_then(MenuRefactorError::suggestion) {
            output.push_str(&format!(
                "\n{} {}\n",
                style("help:").cyan().bold(),
                suggestion
            ));
        }

        output
    }

    /// Get exit code from error
    pub fn exit_code(error: &anyhow::Error) -> i32 {
        Self::find(error).map_or(1, MenuRefactorError::exit_code)
    }

    // Context layers wrap the typed error, so search the whole chain.
    fn find(error: &anyhow::Error) -> Option<&MenuRefactorError> {
        error
            .chain()
            .find_map(|cause| cause.downcast_ref::<MenuRefactorError>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    fn parse_error() -> MenuRefactorError {
        let source = serde_json::from_str::<serde_json::Value>("[1,").unwrap_err();
        MenuRefactorError::Parse {
            path: PathBuf::from("a.json"),
            source,
        }
    }

    #[test]
    fn test_exit_codes_follow_conventions() {
        let not_found = MenuRefactorError::NotFound {
            path: PathBuf::from("a.json"),
        };
        assert_eq!(not_found.exit_code(), 66);
        assert_eq!(parse_error().exit_code(), 65);

        let write = MenuRefactorError::Write {
            path: PathBuf::from("a.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(write.exit_code(), 74);

        let backup = MenuRefactorError::Backup {
            path: PathBuf::from("a.json"),
            source: BackupError::InvalidFileName {
                path: PathBuf::from("/"),
            },
        };
        assert_eq!(backup.exit_code(), 73);

        let config = MenuRefactorError::InvalidConfig {
            reason: "no sources".to_string(),
        };
        assert_eq!(config.exit_code(), 78);
    }

    #[test]
    fn test_not_found_message_names_the_path() {
        let err = MenuRefactorError::NotFound {
            path: PathBuf::from("menus/a.json"),
        };
        assert_eq!(err.to_string(), "File menus/a.json not found");
    }

    #[test]
    fn test_parse_error_keeps_decoder_source() {
        let err = parse_error();
        let source = std::error::Error::source(&err).expect("Parse should carry a source");
        assert!(source.to_string().contains("line 1"));
    }

    #[test]
    fn test_every_variant_has_suggestion() {
        let errors = vec![
            MenuRefactorError::NotFound {
                path: PathBuf::from("a.json"),
            },
            parse_error(),
            MenuRefactorError::WouldChange {
                path: PathBuf::from("a.json"),
            },
            MenuRefactorError::InvalidConfig {
                reason: "x".to_string(),
            },
        ];

        for err in errors {
            assert!(err.suggestion().is_some(), "missing suggestion for {err:?}");
        }
    }

    #[test]
    fn test_formatter_finds_typed_error_behind_context() {
        let result: Result<(), MenuRefactorError> = Err(parse_error());
        let err = result.context("Failed to load menu").unwrap_err();

        assert_eq!(ErrorFormatter::exit_code(&err), 65);

        let formatted = ErrorFormatter::format(&err);
        assert!(formatted.contains("Failed to load menu"));
        assert!(formatted.contains("Error decoding JSON"));
        assert!(formatted.contains("help:"));
    }

    #[test]
    fn test_formatter_generic_error_exits_one() {
        let err = anyhow::anyhow!("something else");
        assert_eq!(ErrorFormatter::exit_code(&err), 1);
        assert!(!ErrorFormatter::format(&err).contains("help:"));
    }
}
