//! # Logtree
//!
//! A hierarchical, level-filtered logging framework.
//!
//! Named loggers form a dot-separated tree. Each logger owns a severity
//! threshold, an optional record filter, an ordered list of handlers and a
//! propagate flag; records accepted by a logger fan out to its own handlers
//! and then, via propagation, to its ancestors' handlers up to the root.
//!
//! ## Features
//!
//! - **Logger hierarchy**: one canonical logger per name, ancestors created
//!   on demand
//! - **Independent thresholds**: every logger and every handler filters by
//!   its own level
//! - **Pluggable sinks**: console and file handlers included, custom
//!   handlers via the [`Handler`](core::Handler) trait
//! - **Thread safe**: synchronous dispatch, safe to call from any thread
//!
//! ## Quick start
//!
//! ```
//! use logtree::config::basic_config;
//! use logtree::core::Registry;
//!
//! let registry = Registry::new();
//! basic_config(&registry);
//!
//! let logger = registry.get("svc.db");
//! logger.info("connection pool ready").unwrap();
//! logger.debug("below the root's INFO threshold, dropped").unwrap();
//! ```

pub mod config;
pub mod core;
pub mod formatters;
pub mod handlers;
pub mod macros;

pub mod prelude {
    pub use crate::config::LoggerConfig;
    pub use crate::core::{
        Filter, Formatter, Handler, Level, LogError, Logger, Payload, Record, Registry, Result,
        TimestampFormat, ALL_LEVELS, STANDARD_LEVELS,
    };
    pub use crate::formatters::SimpleFormatter;
    #[cfg(feature = "console")]
    pub use crate::handlers::ConsoleHandler;
    #[cfg(feature = "file")]
    pub use crate::handlers::FileHandler;
}

pub use crate::core::{
    Filter, Formatter, Handler, Level, LogError, Logger, Payload, Record, Registry, Result,
};

use std::sync::Arc;

/// Find or create a logger by name in the process-wide registry.
pub fn get_logger(name: &str) -> Arc<Logger> {
    core::registry::global().get(name)
}

/// The process-wide root logger.
pub fn root() -> Arc<Logger> {
    core::registry::global().root()
}
