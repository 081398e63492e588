//! Console handler implementation

use crate::core::{Formatter, Handler, Level, Record, Result};
use crate::formatters::SimpleFormatter;
use colored::Colorize;
use std::io::Write;

/// Publishes formatted records to stderr.
///
/// Defaults to the [`SimpleFormatter`], an `All` threshold and colored
/// output by level.
pub struct ConsoleHandler {
    level: Level,
    formatter: Box<dyn Formatter>,
    use_colors: bool,
}

impl ConsoleHandler {
    #[must_use]
    pub fn new() -> Self {
        Self {
            level: Level::All,
            formatter: Box::new(SimpleFormatter::new()),
            use_colors: true,
        }
    }

    /// Set this handler's own admission threshold
    #[must_use]
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Replace the formatter
    #[must_use]
    pub fn with_formatter(mut self, formatter: impl Formatter + 'static) -> Self {
        self.formatter = Box::new(formatter);
        self
    }

    /// Enable or disable colored output
    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }
}

impl Default for ConsoleHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl Handler for ConsoleHandler {
    fn level(&self) -> Level {
        self.level
    }

    fn publish(&self, record: &Record) -> Result<()> {
        let line = self.formatter.format(record);
        let line = if self.use_colors {
            line.color(record.level().color()).to_string()
        } else {
            line
        };
        eprintln!("{}", line);
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        std::io::stderr().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
