pub mod docs;
pub mod init;
pub mod scan;
pub mod sync;
pub mod validate;

use anyhow::Result;
use owo_colors::Style;
use serde::Serialize;

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Styles for plain output; every style is empty when color is off
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    fn pick(&self, style: Style) -> Style {
        if self.enabled { style } else { Style::new() }
    }

    pub fn ok(&self) -> Style {
        self.pick(Style::new().green().bold())
    }

    pub fn warn(&self) -> Style {
        self.pick(Style::new().yellow().bold())
    }

    pub fn error(&self) -> Style {
        self.pick(Style::new().red().bold())
    }

    pub fn heading(&self) -> Style {
        self.pick(Style::new().bold())
    }

    pub fn dim(&self) -> Style {
        self.pick(Style::new().dimmed())
    }
}
