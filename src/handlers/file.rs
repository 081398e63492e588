//! File handler implementation

use crate::core::{Formatter, Handler, Level, LogError, Record, Result};
use crate::formatters::SimpleFormatter;
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

/// Publishes formatted records to a file, one line per record.
///
/// The file is opened in append mode at construction. Writes are buffered;
/// the handler flushes on demand and on drop. The handler does not own the
/// path beyond the open descriptor, and publish failures surface to the
/// logging caller as [`LogError`].
pub struct FileHandler {
    path: PathBuf,
    level: Level,
    formatter: Box<dyn Formatter>,
    writer: Mutex<BufWriter<File>>,
}

impl FileHandler {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| LogError::io(format!("opening log file '{}'", path.display()), e))?;
        Ok(Self {
            path,
            level: Level::All,
            formatter: Box::new(SimpleFormatter::new()),
            writer: Mutex::new(BufWriter::new(file)),
        })
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

    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl std::fmt::Debug for FileHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileHandler")
            .field("path", &self.path)
            .field("level", &self.level)
            .finish_non_exhaustive()
    }
}

impl Handler for FileHandler {
    fn level(&self) -> Level {
        self.level
    }

    fn publish(&self, record: &Record) -> Result<()> {
        let mut line = self.formatter.format(record);
        line.push('\n');
        let mut writer = self.writer.lock();
        writer
            .write_all(line.as_bytes())
            .map_err(|e| LogError::io(format!("writing log file '{}'", self.path.display()), e))
    }

    fn flush(&self) -> Result<()> {
        self.writer.lock().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}

impl Drop for FileHandler {
    fn drop(&mut self) {
        // Buffered lines reach the disk even without an explicit flush.
        let _ = self.flush();
    }
}
