use super::{Palette, print_json};
use crate::types::OutputFormat;
use anyhow::Result;
use owo_colors::OwoColorize;
use std::path::Path;
use tracksync_engine::ValidationIssue;

pub fn print_issues(
    tracker_path: &Path,
    issues: &[ValidationIssue],
    format: OutputFormat,
    color: bool,
) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(&serde_json::json!({
            "tracker_path": tracker_path,
            "valid": issues.is_empty(),
            "issues": issues,
        }));
    }

    let palette = Palette::new(color);
    if issues.is_empty() {
        println!(
            "{} {}",
            "Valid:".style(palette.ok()),
            tracker_path.display()
        );
        return Ok(());
    }

    println!(
        "{} {}",
        "Invalid:".style(palette.error()),
        tracker_path.display()
    );
    for issue in issues {
        println!("  - {}", issue);
    }
    Ok(())
}
