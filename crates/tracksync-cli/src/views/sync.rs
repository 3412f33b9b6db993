use super::{Palette, print_json};
use crate::types::OutputFormat;
use anyhow::Result;
use owo_colors::OwoColorize;
use tracksync_engine::SectionReport;
use tracksync_runtime::{SyncMode, SyncOutcome};

pub fn print_outcome(outcome: &SyncOutcome, format: OutputFormat, color: bool) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(outcome);
    }

    let palette = Palette::new(color);
    println!(
        "{} {}",
        "Tracker:".style(palette.heading()),
        outcome.tracker_path.display()
    );
    println!("Scanned {} file(s)", outcome.scanned_files);

    for section in &outcome.report.sections {
        print_section(section, palette);
    }

    if let Some(docs) = &outcome.documentation {
        let state = if docs.generated { "generated" } else { "not generated" };
        println!("Documentation: {}", state);
    }

    let summary = match (outcome.mode, outcome.changed, outcome.written) {
        (_, false, _) => "Tracker is up to date".style(palette.ok()).to_string(),
        (SyncMode::Write, true, true) => "Tracker updated".style(palette.ok()).to_string(),
        (SyncMode::Write, true, false) => "Tracker already current on disk".style(palette.ok()).to_string(),
        (SyncMode::DryRun, true, _) => "Tracker would change (dry run)".style(palette.warn()).to_string(),
        (SyncMode::Check, true, _) => "Tracker is out of date".style(palette.error()).to_string(),
    };
    println!("{}", summary);
    Ok(())
}

fn print_section(section: &SectionReport, palette: Palette) {
    println!(
        "{}: {} added, {} updated, {} stale, {} unchanged",
        section.section.style(palette.heading()),
        section.added.len(),
        section.updated.len(),
        section.stale.len() + section.flagged.len() + section.pruned.len(),
        section.unchanged
    );

    for path in &section.added {
        println!("  {} {}", "+".style(palette.ok()), path);
    }
    for path in &section.updated {
        println!("  {} {}", "~".style(palette.warn()), path);
    }
    for path in &section.flagged {
        println!("  {} {} (deprecated)", "!".style(palette.warn()), path);
    }
    for path in &section.pruned {
        println!("  {} {} (removed)", "-".style(palette.error()), path);
    }
    for path in &section.stale {
        println!("  {} {}", "?".style(palette.dim()), path.style(palette.dim()));
    }
}
