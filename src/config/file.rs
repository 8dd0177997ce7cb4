//! Configuration file data structures

use crate::error::MenuRefactorError;
use crate::menu::{FieldWhitelist, RelocationPlan, DEFAULT_ALLOWED_FIELDS, DEFAULT_INDENT};
use serde::{Deserialize, Serialize};

/// Configuration file name
pub const CONFIG_FILE_NAME: &str = ".menu-refactor.toml";

/// Largest accepted indentation width
pub const MAX_INDENT: usize = 16;

/// menu-refactor configuration file structure
///
/// Every field is optional in the file; missing fields take the defaults
/// of the original menu migration.
///
/// ```toml
/// indent = 4
/// allowed-fields = ["id", "displayName", "url", "route", "icon", "children", "type"]
///
/// [relocation]
/// sources = ["驾驶舱", "能源监视"]
/// destination = "智能能源管理"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RefactorConfig {
    /// Spaces per indentation level in the output
    pub indent: usize,

    /// Keys kept on every node
    #[serde(rename = "allowed-fields")]
    pub allowed_fields: Vec<String>,

    /// Nodes to move and their destination
    pub relocation: RelocationPlan,
}

impl Default for RefactorConfig {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT,
            allowed_fields: DEFAULT_ALLOWED_FIELDS.iter().map(|f| f.to_string()).collect(),
            relocation: RelocationPlan::default(),
        }
    }
}

impl RefactorConfig {
    /// Whitelist built from `allowed-fields`
    pub fn whitelist(&self) -> FieldWhitelist {
        FieldWhitelist::new(self.allowed_fields.iter().cloned())
    }

    /// Validate that the configuration describes a usable transformation
    ///
    /// # Examples
    ///
    /// ```
    /// use menu_refactor::config::RefactorConfig;
    ///
    /// let mut config = RefactorConfig::default();
    /// assert!(config.validate().is_ok());
    ///
    /// config.relocation.destination = config.relocation.sources[0].clone();
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), MenuRefactorError> {
        let invalid = |reason: String| Err(MenuRefactorError::InvalidConfig { reason });
        let plan = &self.relocation;

        if plan.sources.is_empty() {
            return invalid("relocation.sources must name at least one node".to_string());
        }

        if plan.destination.is_empty() || plan.sources.iter().any(String::is_empty) {
            return invalid("relocation labels cannot be empty".to_string());
        }

        for (index, source) in plan.sources.iter().enumerate() {
            if plan.sources[..index].contains(source) {
                return invalid(format!("relocation.sources lists '{}' twice", source));
            }
        }

        if plan.sources.contains(&plan.destination) {
            return invalid(format!(
                "relocation.destination '{}' is also listed as a source",
                plan.destination
            ));
        }

        if self.allowed_fields.is_empty() {
            return invalid("allowed-fields cannot be empty".to_string());
        }

        if self.indent > MAX_INDENT {
            return invalid(format!(
                "indent {} exceeds the maximum of {}",
                self.indent, MAX_INDENT
            ));
        }

        Ok(())
    }
}
