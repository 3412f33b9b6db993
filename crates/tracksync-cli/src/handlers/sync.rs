use crate::context::ExecutionContext;
use crate::views;
use anyhow::{Context, Result};
use tracksync_runtime::SyncMode;

pub fn handle(ctx: &ExecutionContext, mode: SyncMode) -> Result<()> {
    let service = ctx.service()?;
    let tracker_path = service.tracker_path();

    let outcome = service
        .sync(mode)
        .with_context(|| format!("failed to sync {}", tracker_path.display()))?;

    views::sync::print_outcome(&outcome, ctx.format, ctx.color())?;

    if mode == SyncMode::Check {
        outcome.ensure_in_sync()?;
    }
    Ok(())
}
