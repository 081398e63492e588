//! Error types for the logging core

pub type Result<T> = std::result::Result<T, LogError>;

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    /// No level is defined with the given rank
    #[error("invalid level: no level with rank {rank} is defined")]
    InvalidLevel { rank: i32 },

    /// No level is defined with the given name
    #[error("invalid level: no level named '{name}' is defined")]
    InvalidLevelName { name: String },

    /// IO error with context
    #[error("IO error while {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// A handler failed to publish a record
    #[error("handler '{name}' failed to publish: {message}")]
    Handler { name: String, message: String },
}

impl LogError {
    /// Create an IO error with context
    pub fn io(operation: impl Into<String>, source: std::io::Error) -> Self {
        LogError::Io {
            operation: operation.into(),
            source,
        }
    }

    /// Create a handler publish error
    pub fn handler(name: impl Into<String>, message: impl Into<String>) -> Self {
        LogError::Handler {
            name: name.into(),
            message: message.into(),
        }
    }
}
