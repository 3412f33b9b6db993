use crate::args::{Cli, Commands, DocsCommand};
use crate::context::ExecutionContext;
use crate::handlers;
use crate::logging;
use anyhow::Result;
use tracksync_runtime::SyncMode;

/// Exit status for `sync --check` when the tracker is out of date
pub const EXIT_DRIFT: i32 = 2;

pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.log_level);

    let ctx = ExecutionContext::new(cli.project_root, cli.config, cli.tracker, cli.format)?;

    let Some(command) = cli.command else {
        return handlers::sync::handle(&ctx, SyncMode::Write);
    };

    match command {
        Commands::Sync { dry_run, check } => {
            let mode = if check {
                SyncMode::Check
            } else if dry_run {
                SyncMode::DryRun
            } else {
                SyncMode::Write
            };
            handlers::sync::handle(&ctx, mode)
        }
        Commands::Init { force } => handlers::init::handle(&ctx, force),
        Commands::Validate => handlers::validate::handle(&ctx),
        Commands::Scan => handlers::scan::handle(&ctx),
        Commands::Docs { command } => match command {
            DocsCommand::Status => handlers::docs::status(&ctx),
            DocsCommand::Normalize { dir } => handlers::docs::normalize(&ctx, dir.as_deref()),
        },
    }
}

/// True if the error chain ends in a `--check` drift report
pub fn is_drift(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        matches!(
            cause.downcast_ref::<tracksync_runtime::Error>(),
            Some(tracksync_runtime::Error::DriftDetected(_))
        )
    })
}
