//! Simple one-line formatter

use crate::core::{Formatter, Record, TimestampFormat};

/// Renders a brief, human readable summary of a record:
///
/// ```text
/// [2025-01-08T10:30:45.123Z] [INFO   ] svc.db - connection pool ready
/// ```
///
/// Positional placeholders `{0}`, `{1}`, ... in the message are replaced
/// with the record's arguments; placeholders without a matching argument are
/// left as-is. A thrown record renders the error's `Display` output followed
/// by its `source()` chain.
pub struct SimpleFormatter {
    timestamp_format: TimestampFormat,
}

impl SimpleFormatter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            timestamp_format: TimestampFormat::default(),
        }
    }

    /// Set the timestamp format for this formatter
    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Replace `{n}` placeholders with the corresponding argument.
    fn interpolate(message: &str, args: &[String]) -> String {
        let mut out = String::with_capacity(message.len());
        let mut rest = message;
        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let tail = &rest[open..];
            match tail.find('}') {
                Some(close) => {
                    let inner = &tail[1..close];
                    match inner.parse::<usize>().ok().and_then(|i| args.get(i)) {
                        Some(arg) => out.push_str(arg),
                        // Unmatched placeholder stays verbatim.
                        None => out.push_str(&tail[..=close]),
                    }
                    rest = &tail[close + 1..];
                }
                None => {
                    out.push_str(tail);
                    return out;
                }
            }
        }
        out.push_str(rest);
        out
    }

    fn render_body(record: &Record) -> String {
        if let Some(thrown) = record.thrown() {
            let mut body = thrown.to_string();
            let mut source = thrown.source();
            while let Some(cause) = source {
                body.push_str(&format!("; caused by: {}", cause));
                source = cause.source();
            }
            return body;
        }
        Self::interpolate(record.message().unwrap_or(""), record.args())
    }
}

impl Default for SimpleFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter for SimpleFormatter {
    fn format(&self, record: &Record) -> String {
        format!(
            "[{}] [{:7}] {} - {}",
            self.timestamp_format.format(record.timestamp()),
            record.level().as_str(),
            record.logger_name(),
            Self::render_body(record)
        )
    }
}
