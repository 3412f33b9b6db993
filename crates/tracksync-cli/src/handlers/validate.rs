use crate::context::ExecutionContext;
use crate::views;
use anyhow::{Context, Result};

pub fn handle(ctx: &ExecutionContext) -> Result<()> {
    let service = ctx.service()?;
    let tracker_path = service.tracker_path();

    let issues = service
        .validate()
        .with_context(|| format!("failed to read {}", tracker_path.display()))?;

    views::validate::print_issues(&tracker_path, &issues, ctx.format, ctx.color())?;

    if !issues.is_empty() {
        anyhow::bail!(
            "{} has {} schema issue(s)",
            tracker_path.display(),
            issues.len()
        );
    }
    Ok(())
}
