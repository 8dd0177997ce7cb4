use clap::Parser;
use menu_refactor::cmd::{self, RefactorOptions, DEFAULT_MENU_FILE};
use menu_refactor::fmt::NO_EMOJI_ENV;
use std::path::PathBuf;
use std::process;

/// Navigation menu JSON refactorer
///
/// Moves the configured root-level menu nodes under their destination node,
/// then strips every node down to the allowed fields and rewrites the file.
#[derive(Parser)]
#[command(author, version)]
pub struct Cli {
    /// Menu JSON file to rewrite
    #[arg(value_name = "FILE", default_value = DEFAULT_MENU_FILE)]
    file: PathBuf,

    /// Print the refactored document instead of writing it
    #[arg(short, long)]
    dry_run: bool,

    /// Exit with an error if the file would change (writes nothing)
    #[arg(long, conflicts_with = "dry_run")]
    check: bool,

    /// Back up the original file before overwriting it
    #[arg(short, long, conflicts_with_all = ["dry_run", "check"])]
    backup: bool,

    /// Configuration file (defaults to ./.menu-refactor.toml if present)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Disable emoji output (useful for CI/CD or accessibility)
    #[arg(long)]
    no_emoji: bool,
}

fn main() {
    // Initialize logger (use RUST_LOG env var to control verbosity)
    env_logger::init();

    let cli = Cli::parse();

    if cli.no_emoji {
        std::env::set_var(NO_EMOJI_ENV, "1");
    }

    let options = RefactorOptions {
        file: cli.file,
        dry_run: cli.dry_run,
        check: cli.check,
        backup: cli.backup,
        config: cli.config,
    };

    if let Err(e) = cmd::cmd_refactor(&options) {
        use menu_refactor::error::ErrorFormatter;
        eprintln!("{}", ErrorFormatter::format(&e));
        process::exit(ErrorFormatter::exit_code(&e));
    }
}
