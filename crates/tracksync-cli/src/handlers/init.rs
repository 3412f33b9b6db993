use crate::context::ExecutionContext;
use crate::views;
use anyhow::{Context, Result};

pub fn handle(ctx: &ExecutionContext, force: bool) -> Result<()> {
    let service = ctx.service()?;
    let tracker_path = service.tracker_path();

    let outcome = service
        .init(force)
        .with_context(|| format!("failed to initialize {}", tracker_path.display()))?;

    views::init::print_outcome(&tracker_path, outcome, ctx.format, ctx.color())
}
