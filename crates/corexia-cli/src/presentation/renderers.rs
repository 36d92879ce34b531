use crate::args::OutputFormat;
use crate::presentation::view_models::{ListViewModel, TableRow};
use anyhow::Result;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::fmt::Display;

/// Renders view models to stdout, plain or JSON per `--format`.
pub struct ConsoleRenderer {
    format: OutputFormat,
    color: bool,
}

impl ConsoleRenderer {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            color: std::io::stderr().is_terminal(),
        }
    }

    pub fn render<T>(&self, view: &T) -> Result<()>
    where
        T: Serialize + Display,
    {
        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(view)?),
            OutputFormat::Plain => print!("{}", view),
        }
        Ok(())
    }

    /// Render a list page. In plain mode a fixture-fallback notice goes
    /// to stderr; in JSON it is already part of the payload.
    pub fn render_list<Row>(&self, view: &ListViewModel<Row>) -> Result<()>
    where
        Row: Serialize + TableRow,
    {
        if self.format == OutputFormat::Plain {
            if let Some(notice) = &view.notice {
                self.warn(notice);
            }
        }
        self.render(view)
    }

    pub fn warn(&self, message: &str) {
        if self.color {
            eprintln!("{} {}", "Warning:".yellow().bold(), message);
        } else {
            eprintln!("Warning: {}", message);
        }
    }
}
