//! Backups of menu files taken before `--backup` overwrites them
//!
//! A [`BackupManager`] is bound to one menu file. Copies land in
//! `<menu dir>/.menu-refactor/backups/` as `<name>.<utc stamp>.<uuid>.backup`,
//! so repeated runs never overwrite an earlier backup.
//!
//! # Examples
//!
//! ```no_run
//! # use menu_refactor::backup::BackupManager;
//! # use std::path::Path;
//! let manager = BackupManager::for_file(Path::new("menus/a.json"));
//! let backup_path = manager.create_backup()?;
//! println!("saved {}", backup_path.display());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::infra::{FileSystem, RealFileSystem};
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime, SystemTimeError, UNIX_EPOCH};
use thiserror::Error;
use uuid::Uuid;

/// Directory, next to the menu file, that holds tool state
pub const STATE_DIR_NAME: &str = ".menu-refactor";

const BACKUPS_DIR_NAME: &str = "backups";

/// Errors that can occur while backing up a menu file
#[derive(Error, Debug)]
pub enum BackupError {
    /// The menu path ends in `..` or is a root
    #[error("{} has no file name to back up", path.display())]
    InvalidFileName {
        /// Offending path
        path: PathBuf,
    },

    /// Backup directory could not be created
    #[error("Failed to create backup directory {}", dir.display())]
    CreateDirectory {
        /// Directory being created
        dir: PathBuf,
        #[source]
        /// IO error source
        source: io::Error,
    },

    /// Copying the menu file failed
    #[error("Failed to copy {} to {}", from.display(), to.display())]
    Copy {
        /// Menu file
        from: PathBuf,
        /// Backup destination
        to: PathBuf,
        #[source]
        /// IO error source
        source: io::Error,
    },

    /// System clock is set before 1970
    #[error("System clock is before the Unix epoch")]
    Clock(#[from] SystemTimeError),
}

/// UTC stamp `YYYYMMDDTHHMMSS.mmmZ` for a time since the Unix epoch
fn utc_stamp(since_epoch: Duration) -> String {
    let secs = since_epoch.as_secs();
    let (year, month, day) = civil_from_days(secs / 86_400);
    let time_of_day = secs % 86_400;

    format!(
        "{:04}{:02}{:02}T{:02}{:02}{:02}.{:03}Z",
        year,
        month,
        day,
        time_of_day / 3_600,
        time_of_day % 3_600 / 60,
        time_of_day % 60,
        since_epoch.subsec_millis()
    )
}

// Gregorian date for a day count since 1970-01-01 (proleptic, 400-year eras).
fn civil_from_days(days: u64) -> (u64, u64, u64) {
    let z = days + 719_468;
    let era = z / 146_097;
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + u64::from(month <= 2);
    (year, month, day)
}

/// Takes timestamped copies of a single menu file
pub struct BackupManager<FS: FileSystem = RealFileSystem> {
    file: PathBuf,
    backup_dir: PathBuf,
    fs: FS,
}

impl BackupManager<RealFileSystem> {
    /// Back up `file` into `.menu-refactor/backups` beside it
    pub fn for_file(file: &Path) -> Self {
        Self::for_file_with_fs(file, RealFileSystem)
    }
}

impl<FS: FileSystem> BackupManager<FS> {
    /// Create a BackupManager for `file` with a custom filesystem implementation
    pub fn for_file_with_fs(file: &Path, fs: FS) -> Self {
        let root = file
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        Self {
            file: file.to_path_buf(),
            backup_dir: root.join(STATE_DIR_NAME).join(BACKUPS_DIR_NAME),
            fs,
        }
    }

    /// Directory backups are written to
    pub fn backup_dir(&self) -> &Path {
        &self.backup_dir
    }

    /// Copy the menu file into the backup directory
    ///
    /// # Errors
    /// Returns [`BackupError`] if the directory cannot be created or the copy fails
    pub fn create_backup(&self) -> Result<PathBuf, BackupError> {
        let name = self
            .file
            .file_name()
            .ok_or_else(|| BackupError::InvalidFileName {
                path: self.file.clone(),
            })?;

        let stamp = utc_stamp(SystemTime::now().duration_since(UNIX_EPOCH)?);
        let backup_path = self.backup_dir.join(format!(
            "{}.{}.{}.backup",
            name.to_string_lossy(),
            stamp,
            Uuid::new_v4().simple()
        ));

        self.fs
            .create_dir_all(&self.backup_dir)
            .map_err(|source| BackupError::CreateDirectory {
                dir: self.backup_dir.clone(),
                source,
            })?;
        self.fs
            .copy(&self.file, &backup_path)
            .map_err(|source| BackupError::Copy {
                from: self.file.clone(),
                to: backup_path.clone(),
                source,
            })?;

        log::debug!("backed up {} to {}", self.file.display(), backup_path.display());
        Ok(backup_path)
    }
}
