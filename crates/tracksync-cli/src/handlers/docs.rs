use crate::context::ExecutionContext;
use crate::views;
use anyhow::{Context, Result};
use std::path::Path;

pub fn status(ctx: &ExecutionContext) -> Result<()> {
    let service = ctx.service()?;
    let docs_dir = service.docs_dir();

    let status = service
        .documentation_status()
        .with_context(|| format!("failed to inspect {}", docs_dir.display()))?;

    views::docs::print_status(&docs_dir, &status, ctx.format, ctx.color())
}

pub fn normalize(ctx: &ExecutionContext, dir: Option<&Path>) -> Result<()> {
    let service = ctx.service()?;
    let report = service
        .normalize_docs(dir)
        .context("failed to normalize generated docs")?;

    views::docs::print_normalize(&report, ctx.format, ctx.color())
}
