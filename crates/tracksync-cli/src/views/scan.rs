use super::{Palette, print_json};
use crate::types::OutputFormat;
use anyhow::Result;
use owo_colors::OwoColorize;
use tracksync_types::{ScannedFile, format_date};

pub fn print_files(files: &[ScannedFile], format: OutputFormat, color: bool) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(files);
    }

    if files.is_empty() {
        println!("No tracked files found");
        return Ok(());
    }

    let palette = Palette::new(color);
    for file in files {
        println!(
            "{:<12} {}  {}",
            file.section,
            format_date(file.modified).style(palette.dim()),
            file.path
        );
    }
    Ok(())
}
