use crate::context::ExecutionContext;
use crate::views;
use anyhow::{Context, Result};

pub fn handle(ctx: &ExecutionContext) -> Result<()> {
    let service = ctx.service()?;
    let files = service
        .scan()
        .with_context(|| format!("failed to scan {}", ctx.project_root().display()))?;

    views::scan::print_files(&files, ctx.format, ctx.color())
}
