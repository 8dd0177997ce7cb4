//! Refactor workflow orchestration
//!
//! Runs the load, relocate, filter and save stages against one menu file. It
//! separates the transformation from presentation, so the same run can be
//! driven from the CLI or programmatically.
//!
//! # Examples
//!
//! ```no_run
//! use menu_refactor::cmd::workflow::{RefactorMode, RefactorWorkflow};
//! use menu_refactor::config::RefactorConfig;
//! use std::path::Path;
//!
//! let workflow = RefactorWorkflow::new(Path::new("a.json"), RefactorConfig::default());
//! let result = workflow.execute(RefactorMode::Write { backup: true })?;
//! println!("moved: {}", result.relocation.is_moved());
//! # Ok::<(), anyhow::Error>(())
//! ```

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::backup::BackupManager;
use crate::config::RefactorConfig;
use crate::error::MenuRefactorError;
use crate::infra::{FileSystem, RealFileSystem};
use crate::menu::{self, RelocationOutcome};

/// What to do with the transformed document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefactorMode {
    /// Overwrite the file, optionally backing it up first
    Write {
        /// Copy the original into the backup directory before writing
        backup: bool,
    },
    /// Produce the rendered document without writing
    DryRun,
    /// Only report whether the file would change
    Check,
}

/// Result of one refactor run
#[derive(Debug)]
pub struct RefactorResult {
    /// What the relocation stage did
    pub relocation: RelocationOutcome,
    /// Keys removed by the filtering stage, as JSON pointers
    pub removed_fields: Vec<String>,
    /// Rendered output document
    pub rendered: String,
    /// Whether the rendered output differs from the file on disk
    pub changed: bool,
    /// Whether the file was overwritten
    pub written: bool,
    /// Backup copy of the original, if one was made
    pub backup_path: Option<PathBuf>,
}

/// Refactor workflow orchestrator
pub struct RefactorWorkflow<FS: FileSystem = RealFileSystem> {
    file: PathBuf,
    config: RefactorConfig,
    fs: FS,
}

impl RefactorWorkflow<RealFileSystem> {
    /// Create a workflow for `file` on the real filesystem
    pub fn new(file: &Path, config: RefactorConfig) -> Self {
        Self::with_fs(file, config, RealFileSystem)
    }
}

impl<FS: FileSystem> RefactorWorkflow<FS> {
    /// Create a workflow with a custom filesystem implementation
    pub fn with_fs(file: &Path, config: RefactorConfig, fs: FS) -> Self {
        Self {
            file: file.to_path_buf(),
            config,
            fs,
        }
    }

    /// Menu file this workflow operates on
    pub fn file(&self) -> &Path {
        &self.file
    }

    /// Run every stage; only [`RefactorMode::Write`] touches the disk
    ///
    /// Nothing is written unless loading, relocation and filtering all
    /// succeed.
    pub fn execute(&self, mode: RefactorMode) -> Result<RefactorResult> {
        let source = menu::read_source_with_fs(&self.file, &self.fs)?;
        let doc = menu::parse_document(&source, &self.file)?;

        let (doc, relocation) = menu::relocate(doc, &self.config.relocation);

        let whitelist = self.config.whitelist();
        let removed_fields = whitelist.violations(&doc);
        let doc = menu::filter_fields(&doc, &whitelist);
        log::debug!("filtered {} field(s)", removed_fields.len());

        let rendered = menu::render_document(&doc, self.config.indent).map_err(|e| {
            MenuRefactorError::Write {
                path: self.file.clone(),
                source: e.into(),
            }
        })?;
        let changed = rendered != source;

        let mut result = RefactorResult {
            relocation,
            removed_fields,
            rendered,
            changed,
            written: false,
            backup_path: None,
        };

        if let RefactorMode::Write { backup } = mode {
            if backup {
                let manager = BackupManager::for_file_with_fs(&self.file, &self.fs);
                let path = manager
                    .create_backup()
                    .map_err(|source| MenuRefactorError::Backup {
                        path: self.file.clone(),
                        source,
                    })?;
                result.backup_path = Some(path);
            }

            menu::save_document_with_fs(&self.file, &doc, self.config.indent, &self.fs)?;
            result.written = true;
            log::info!("wrote {}", self.file.display());
        }

        Ok(result)
    }
}
