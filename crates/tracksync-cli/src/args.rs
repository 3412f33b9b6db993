use crate::types::{LogLevel, OutputFormat};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tracksync")]
#[command(about = "Keep the project tracker in sync with the working tree", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Project root (defaults to $TRACKSYNC_PROJECT_ROOT, the git work tree, or the current directory)
    #[arg(long, global = true)]
    pub project_root: Option<String>,

    /// Tracker file, relative to the project root (overrides tracksync.toml)
    #[arg(long, global = true)]
    pub tracker: Option<PathBuf>,

    /// Configuration file (defaults to <project-root>/tracksync.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    /// Log level for stderr diagnostics (RUST_LOG takes precedence)
    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Merge the working tree into the tracker (default command)
    Sync {
        /// Report what would change without writing
        #[arg(long, conflicts_with = "check")]
        dry_run: bool,

        /// Exit with status 2 if the tracker is out of date
        #[arg(long)]
        check: bool,
    },

    /// Create a default tracker
    Init {
        /// Overwrite an existing tracker
        #[arg(long)]
        force: bool,
    },

    /// Check the tracker against its schema
    Validate,

    /// List files matched by the configured sections
    Scan,

    /// Generated documentation helpers
    Docs {
        #[command(subcommand)]
        command: DocsCommand,
    },
}

#[derive(Subcommand)]
pub enum DocsCommand {
    /// Show whether generated docs exist
    Status,

    /// Normalize line endings and trailing whitespace of generated HTML/JS
    Normalize {
        /// Directory to normalize (defaults to the configured docs dir)
        #[arg(long)]
        dir: Option<PathBuf>,
    },
}
