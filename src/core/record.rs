//! Log record structure

use super::level::Level;
use chrono::{DateTime, Utc};
use std::error::Error;
use std::fmt;

/// What a logging call carries: either a raw message or a thrown error.
///
/// A record built from a thrown error has no message; a record built from
/// text has no thrown error. Never both, never neither.
pub enum Payload {
    /// A raw, uninterpolated message.
    Message(String),
    /// An error value logged in place of a message.
    Thrown(Box<dyn Error + Send + Sync>),
}

impl Payload {
    /// Wrap an error value as a thrown payload.
    pub fn thrown(error: impl Error + Send + Sync + 'static) -> Self {
        Payload::Thrown(Box::new(error))
    }
}

impl From<&str> for Payload {
    fn from(message: &str) -> Self {
        Payload::Message(message.to_string())
    }
}

impl From<String> for Payload {
    fn from(message: String) -> Self {
        Payload::Message(message)
    }
}

impl From<Box<dyn Error + Send + Sync>> for Payload {
    fn from(error: Box<dyn Error + Send + Sync>) -> Self {
        Payload::Thrown(error)
    }
}

/// One immutable logging event snapshot.
///
/// Created exactly once per logging call, immediately before dispatch. Once
/// it reaches the first handler the record logically belongs to the dispatch
/// pipeline and is only read, never updated; the struct exposes accessors
/// and no mutators.
///
/// The message is stored raw. Placeholder interpolation (`{0}`, `{1}`, ...)
/// is the job of a [`Formatter`](crate::core::Formatter), so the same record
/// can be rendered differently by different handlers.
pub struct Record {
    timestamp: DateTime<Utc>,
    level: Level,
    message: Option<String>,
    args: Vec<String>,
    logger_name: String,
    thrown: Option<Box<dyn Error + Send + Sync>>,
}

impl Record {
    /// Sanitize a message to prevent log injection: newlines, carriage
    /// returns and tabs are replaced with escape sequences so a crafted
    /// message cannot fake additional log lines.
    fn sanitize_message(message: &str) -> String {
        message
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    pub fn new(
        logger_name: impl Into<String>,
        level: Level,
        payload: impl Into<Payload>,
        args: Vec<String>,
    ) -> Self {
        let (message, thrown) = match payload.into() {
            Payload::Message(message) => (Some(Self::sanitize_message(&message)), None),
            Payload::Thrown(error) => (None, Some(error)),
        };
        // Args end up interpolated into rendered lines, so they are
        // sanitized the same way as the message.
        let args = args.iter().map(|arg| Self::sanitize_message(arg)).collect();
        Self {
            timestamp: Utc::now(),
            level,
            message,
            args,
            logger_name: logger_name.into(),
            thrown,
        }
    }

    #[must_use]
    pub fn timestamp(&self) -> &DateTime<Utc> {
        &self.timestamp
    }

    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }

    /// The raw message, absent when the record carries a thrown error.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// The positional arguments of the logging call, rendered to strings.
    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Name of the logger the record originated from.
    #[must_use]
    pub fn logger_name(&self) -> &str {
        &self.logger_name
    }

    /// The thrown error, absent when the record carries a message.
    #[must_use]
    pub fn thrown(&self) -> Option<&(dyn Error + Send + Sync)> {
        self.thrown.as_deref()
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Record")
            .field("timestamp", &self.timestamp)
            .field("level", &self.level)
            .field("message", &self.message)
            .field("args", &self.args)
            .field("logger_name", &self.logger_name)
            .field("thrown", &self.thrown.as_ref().map(|e| e.to_string()))
            .finish()
    }
}
