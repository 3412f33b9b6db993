use super::{Palette, print_json};
use crate::types::OutputFormat;
use anyhow::Result;
use owo_colors::OwoColorize;
use std::path::Path;
use tracksync_runtime::InitOutcome;

pub fn print_outcome(
    tracker_path: &Path,
    outcome: InitOutcome,
    format: OutputFormat,
    color: bool,
) -> Result<()> {
    let status = match outcome {
        InitOutcome::Created => "created",
        InitOutcome::Overwritten => "overwritten",
        InitOutcome::AlreadyExists => "already_exists",
    };

    if format == OutputFormat::Json {
        return print_json(&serde_json::json!({
            "tracker_path": tracker_path,
            "status": status,
        }));
    }

    let palette = Palette::new(color);
    match outcome {
        InitOutcome::Created => println!(
            "{} {}",
            "Created tracker".style(palette.ok()),
            tracker_path.display()
        ),
        InitOutcome::Overwritten => println!(
            "{} {}",
            "Overwrote tracker".style(palette.warn()),
            tracker_path.display()
        ),
        InitOutcome::AlreadyExists => println!(
            "Tracker already exists at {} (use --force to overwrite)",
            tracker_path.display()
        ),
    }
    Ok(())
}
