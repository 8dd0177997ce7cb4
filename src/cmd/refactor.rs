//! Refactor command implementation
//!
//! Thin presentation layer for the refactor command.
//! The transformation lives in `workflow::RefactorWorkflow`.

use anyhow::Result;
use console::style;
use std::env;
use std::path::PathBuf;

use crate::cmd::workflow::{RefactorMode, RefactorResult, RefactorWorkflow};
use crate::config::{ConfigLoader, RefactorConfig};
use crate::error::MenuRefactorError;
use crate::fmt::{icon, BROOM, CHECKMARK, CROSSMARK, FLOPPY, INFO, TRUCK, WARNING, WRENCH};
use crate::menu::RelocationOutcome;

/// File processed when no path is given on the command line
pub const DEFAULT_MENU_FILE: &str = "a.json";

/// Options for one refactor invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefactorOptions {
    /// Menu file to rewrite
    pub file: PathBuf,
    /// Print the result instead of writing it
    pub dry_run: bool,
    /// Fail if the file is not already normalized
    pub check: bool,
    /// Back up the original before overwriting
    pub backup: bool,
    /// Explicit configuration file
    pub config: Option<PathBuf>,
}

impl Default for RefactorOptions {
    fn default() -> Self {
        Self {
            file: PathBuf::from(DEFAULT_MENU_FILE),
            dry_run: false,
            check: false,
            backup: false,
            config: None,
        }
    }
}

impl RefactorOptions {
    fn mode(&self) -> RefactorMode {
        if self.check {
            RefactorMode::Check
        } else if self.dry_run {
            RefactorMode::DryRun
        } else {
            RefactorMode::Write {
                backup: self.backup,
            }
        }
    }
}

/// Progress output; goes to stderr when stdout carries the document
struct Console {
    to_stderr: bool,
}

impl Console {
    fn line(&self, message: impl std::fmt::Display) {
        if self.to_stderr {
            eprintln!("{}", message);
        } else {
            println!("{}", message);
        }
    }
}

/// Main refactor command handler (presentation layer)
///
/// # Examples
///
/// ```no_run
/// use menu_refactor::cmd::refactor::{cmd_refactor, RefactorOptions};
///
/// // Rewrite ./a.json in place
/// let result = cmd_refactor(&RefactorOptions::default())?;
/// assert!(result.written);
///
/// // Preview the result for another file
/// cmd_refactor(&RefactorOptions {
///     file: "menus.json".into(),
///     dry_run: true,
///     ..Default::default()
/// })?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn cmd_refactor(options: &RefactorOptions) -> Result<RefactorResult> {
    let console = Console {
        to_stderr: options.dry_run && !options.check,
    };

    let config = load_config(options)?;

    console.line(format_args!(
        "{} {} {}",
        icon(WRENCH),
        style("menu-refactor").bold(),
        options.file.display()
    ));

    let workflow = RefactorWorkflow::new(&options.file, config);
    let result = workflow.execute(options.mode())?;

    present_relocation(&console, &result.relocation);
    present_filtering(&console, &result);

    match options.mode() {
        RefactorMode::Check => present_check(&console, &result, options)?,
        RefactorMode::DryRun => {
            println!("{}", result.rendered);
            console.line(format_args!(
                "[DRY RUN] {} not modified",
                options.file.display()
            ));
        }
        RefactorMode::Write { .. } => {
            if let Some(backup) = &result.backup_path {
                console.line(format_args!(
                    "{} Backup saved to {}",
                    icon(FLOPPY),
                    style(backup.display()).dim()
                ));
            }
            console.line(format_args!(
                "{} Successfully processed {}",
                icon(CHECKMARK),
                style(options.file.display()).green()
            ));
        }
    }

    Ok(result)
}

fn load_config(options: &RefactorOptions) -> Result<RefactorConfig> {
    match &options.config {
        Some(path) => ConfigLoader::load_file(path),
        None => ConfigLoader::load(&env::current_dir()?),
    }
}

fn present_relocation(console: &Console, outcome: &RelocationOutcome) {
    match outcome {
        RelocationOutcome::Moved { moved, destination } => {
            let labels: Vec<String> = moved.iter().map(|l| format!("'{}'", l)).collect();
            console.line(format_args!(
                "{} Found target nodes. Moving {} to '{}'...",
                icon(TRUCK),
                labels.join(" and "),
                style(destination).cyan()
            ));
        }
        RelocationOutcome::MissingParticipants { missing } => {
            console.line(format_args!(
                "{} Note: Could not find all target nodes at the root level (missing: {}). \
                 Skipping move step (they might already be moved).",
                icon(INFO),
                missing.join(", ")
            ));
        }
        RelocationOutcome::RootNotSequence => {
            console.line(format_args!(
                "{} {} Root is not a list, skipping move step.",
                icon(WARNING),
                style("Warning:").yellow()
            ));
        }
    }
}

fn present_filtering(console: &Console, result: &RefactorResult) {
    console.line(format_args!("{} Filtering fields...", icon(BROOM)));
    if !result.removed_fields.is_empty() {
        console.line(format_args!(
            "   {} Removed {} field(s)",
            style("•").dim(),
            result.removed_fields.len()
        ));
    }
}

fn present_check(
    console: &Console,
    result: &RefactorResult,
    options: &RefactorOptions,
) -> Result<()> {
    if result.changed {
        console.line(format_args!(
            "{} {} is not normalized",
            icon(CROSSMARK),
            options.file.display()
        ));
        for pointer in &result.removed_fields {
            console.line(format_args!("   {} {}", style("-").red(), pointer));
        }
        return Err(MenuRefactorError::WouldChange {
            path: options.file.clone(),
        }
        .into());
    }

    console.line(format_args!(
        "{} {} is already normalized",
        icon(CHECKMARK),
        options.file.display()
    ));
    Ok(())
}
