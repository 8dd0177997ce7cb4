//! Configuration file loading

use super::file::{RefactorConfig, CONFIG_FILE_NAME};
use crate::error::MenuRefactorError;
use crate::infra::{FileSystem, RealFileSystem};
use anyhow::Result;
use std::io;
use std::path::Path;

/// Handles loading configuration files
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config from .menu-refactor.toml in the given directory
    ///
    /// A missing file yields [`RefactorConfig::default`].
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use menu_refactor::config::ConfigLoader;
    /// use std::path::Path;
    ///
    /// let config = ConfigLoader::load(Path::new("."))?;
    /// println!("Moving into: {}", config.relocation.destination);
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn load(dir: &Path) -> Result<RefactorConfig> {
        Self::load_with_fs(dir, &RealFileSystem)
    }

    /// Load config with a custom filesystem implementation
    pub fn load_with_fs<FS: FileSystem>(dir: &Path, fs: &FS) -> Result<RefactorConfig> {
        let config_path = dir.join(CONFIG_FILE_NAME);

        let contents = match fs.read_to_string(&config_path) {
            Ok(c) => c,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("no {} in {}, using defaults", CONFIG_FILE_NAME, dir.display());
                return Ok(RefactorConfig::default());
            }
            Err(source) => {
                return Err(MenuRefactorError::Read {
                    path: config_path,
                    source,
                }
                .into());
            }
        };

        Self::parse(&contents, &config_path)
    }

    /// Load config from an explicit path, which must exist
    pub fn load_file(path: &Path) -> Result<RefactorConfig> {
        Self::load_file_with_fs(path, &RealFileSystem)
    }

    /// Load an explicit config file with a custom filesystem implementation
    pub fn load_file_with_fs<FS: FileSystem>(path: &Path, fs: &FS) -> Result<RefactorConfig> {
        let contents = fs.read_to_string(path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                MenuRefactorError::ConfigNotFound {
                    path: path.to_path_buf(),
                    source,
                }
            } else {
                MenuRefactorError::Read {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;

        Self::parse(&contents, path)
    }

    fn parse(contents: &str, path: &Path) -> Result<RefactorConfig> {
        let config: RefactorConfig =
            toml_edit::de::from_str(contents).map_err(|e| MenuRefactorError::InvalidConfig {
                reason: format!("{}: {}", path.display(), e),
            })?;

        config.validate()?;
        log::debug!("loaded configuration from {}", path.display());

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockFileSystem {
        file_content: Option<String>,
        should_fail_read: bool,
    }

    impl MockFileSystem {
        fn new() -> Self {
            Self {
                file_content: None,
                should_fail_read: false,
            }
        }

        fn with_content(content: &str) -> Self {
            Self {
                file_content: Some(content.to_string()),
                should_fail_read: false,
            }
        }

        fn with_read_error() -> Self {
            Self {
                file_content: None,
                should_fail_read: true,
            }
        }
    }

    impl FileSystem for MockFileSystem {
        fn read_to_string(&self, _path: &Path) -> io::Result<String> {
            if self.should_fail_read {
                return Err(io::Error::new(
                    io::ErrorKind::PermissionDenied,
                    "permission denied",
                ));
            }
            self.file_content
                .clone()
                .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "file not found"))
        }

        fn write(&self, _path: &Path, _contents: impl AsRef<[u8]>) -> io::Result<()> {
            unimplemented!()
        }

        fn create_dir_all(&self, _path: &Path) -> io::Result<()> {
            unimplemented!()
        }

        fn copy(&self, _from: &Path, _to: &Path) -> io::Result<u64> {
            unimplemented!()
        }
    }

    fn invalid_reason(err: &anyhow::Error) -> &str {
        match err.downcast_ref::<MenuRefactorError>() {
            Some(MenuRefactorError::InvalidConfig { reason }) => reason,
            other => panic!("expected InvalidConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_loader_loads_from_valid_toml() {
        let temp = tempfile::tempdir().unwrap();
        let config_path = temp.path().join(CONFIG_FILE_NAME);

        let toml_content = r#"
indent = 2
allowed-fields = ["id", "displayName", "children"]

[relocation]
sources = ["Reports"]
destination = "Analytics"
"#;
        std::fs::write(&config_path, toml_content).unwrap();

        let config = ConfigLoader::load(temp.path()).unwrap();
        assert_eq!(config.indent, 2);
        assert_eq!(config.allowed_fields, vec!["id", "displayName", "children"]);
        assert_eq!(config.relocation.sources, vec!["Reports"]);
        assert_eq!(config.relocation.destination, "Analytics");
    }

    #[test]
    fn test_loader_with_missing_file_uses_defaults() {
        let fs = MockFileSystem::new();
        let config = ConfigLoader::load_with_fs(Path::new("/test"), &fs).unwrap();

        assert_eq!(config, RefactorConfig::default());
    }

    #[test]
    fn test_loader_handles_empty_file() {
        let fs = MockFileSystem::with_content("");
        let config = ConfigLoader::load_with_fs(Path::new("/test"), &fs).unwrap();

        assert_eq!(config, RefactorConfig::default());
    }

    #[test]
    fn test_loader_handles_partial_config() {
        let fs = MockFileSystem::with_content("indent = 2");
        let config = ConfigLoader::load_with_fs(Path::new("/test"), &fs).unwrap();

        assert_eq!(config.indent, 2);
        assert_eq!(config.relocation, RefactorConfig::default().relocation);
    }

    #[test]
    fn test_loader_with_invalid_toml_returns_invalid_config() {
        let fs = MockFileSystem::with_content("invalid { toml syntax");
        let err = ConfigLoader::load_with_fs(Path::new("/test"), &fs).unwrap_err();

        assert!(invalid_reason(&err).contains(CONFIG_FILE_NAME));
    }

    #[test]
    fn test_loader_rejects_inconsistent_config() {
        let fs = MockFileSystem::with_content(
            r#"
[relocation]
sources = ["A", "B"]
destination = "A"
"#,
        );
        let err = ConfigLoader::load_with_fs(Path::new("/test"), &fs).unwrap_err();

        assert!(invalid_reason(&err).contains("also listed"));
    }

    #[test]
    fn test_loader_with_permission_error_returns_error() {
        let fs = MockFileSystem::with_read_error();
        let err = ConfigLoader::load_with_fs(Path::new("/test"), &fs).unwrap_err();

        assert!(err.to_string().contains("Failed to read"));
        assert!(matches!(
            err.downcast_ref::<MenuRefactorError>(),
            Some(MenuRefactorError::Read { .. })
        ));
        assert_eq!(crate::error::ErrorFormatter::exit_code(&err), 74);
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let fs = MockFileSystem::new();
        let err = ConfigLoader::load_file_with_fs(Path::new("/test/custom.toml"), &fs).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<MenuRefactorError>(),
            Some(MenuRefactorError::ConfigNotFound { .. })
        ));
    }

    #[test]
    fn test_explicit_file_is_parsed() {
        let fs = MockFileSystem::with_content("indent = 8");
        let config = ConfigLoader::load_file_with_fs(Path::new("custom.toml"), &fs).unwrap();

        assert_eq!(config.indent, 8);
    }
}
