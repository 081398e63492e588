//! Logging macros for ergonomic message formatting.
//!
//! These macros render the message with `format!` and call the matching
//! logger method. The expansion yields the logger's `Result`, so handler
//! publish failures stay visible to the caller.
//!
//! # Examples
//!
//! ```
//! use logtree::core::Registry;
//! use logtree::{info, severe};
//!
//! let registry = Registry::new();
//! let logger = registry.get("svc");
//!
//! info!(logger, "server listening on port {}", 8080).unwrap();
//! severe!(logger, "cannot reach {}: {}", "db", "timeout").unwrap();
//! ```

/// Log a message at an explicit level with automatic formatting.
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, format!($($arg)+))
    };
}

/// Log a trace-level message.
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::core::Level::Trace, $($arg)+)
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::core::Level::Debug, $($arg)+)
    };
}

/// Log a config-level message.
#[macro_export]
macro_rules! config {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::core::Level::Config, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::core::Level::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::core::Level::Warning, $($arg)+)
    };
}

/// Log a severe-level message.
#[macro_export]
macro_rules! severe {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::core::Level::Severe, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{Level, Registry};

    #[test]
    fn test_log_macro() {
        let registry = Registry::new();
        let logger = registry.get("macros");
        log!(logger, Level::Info, "plain message").unwrap();
        log!(logger, Level::Info, "formatted: {}", 42).unwrap();
    }

    #[test]
    fn test_level_macros() {
        let registry = Registry::new();
        let logger = registry.get("macros.levels");
        logger.set_level(Level::All);

        trace!(logger, "trace {}", 1).unwrap();
        debug!(logger, "debug {}", 2).unwrap();
        config!(logger, "config {}", 3).unwrap();
        info!(logger, "info {}", 4).unwrap();
        warning!(logger, "warning {}", 5).unwrap();
        severe!(logger, "severe {}", 6).unwrap();
    }
}
