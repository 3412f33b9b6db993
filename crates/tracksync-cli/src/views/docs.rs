use super::{Palette, print_json};
use crate::types::OutputFormat;
use anyhow::Result;
use owo_colors::OwoColorize;
use std::path::Path;
use tracksync_runtime::{DocumentationStatus, NormalizeReport};
use tracksync_types::format_date;

pub fn print_status(
    docs_dir: &Path,
    status: &DocumentationStatus,
    format: OutputFormat,
    color: bool,
) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(&serde_json::json!({
            "docs_dir": docs_dir,
            "generated": status.generated,
            "last_updated": status.last_updated.map(format_date),
        }));
    }

    let palette = Palette::new(color);
    println!("Docs directory: {}", docs_dir.display());
    if status.generated {
        println!("Generated: {}", "yes".style(palette.ok()));
    } else {
        println!("Generated: {}", "no".style(palette.warn()));
    }
    if let Some(date) = status.last_updated {
        println!("Last updated: {}", format_date(date));
    }
    Ok(())
}

pub fn print_normalize(report: &NormalizeReport, format: OutputFormat, color: bool) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(report);
    }

    let palette = Palette::new(color);
    for path in &report.rewritten {
        println!("  {} {}", "fixed".style(palette.warn()), path.display());
    }
    println!(
        "Checked {} file(s), normalized {}",
        report.checked,
        report.rewritten.len()
    );
    Ok(())
}
