//! Logger configuration helpers

use crate::core::{Handler, Level, Logger};
use std::sync::Arc;

/// A bundle of configuration applied to a logger in one call.
///
/// Only the pieces that were set are applied; everything else keeps its
/// current value.
///
/// # Example
///
/// ```no_run
/// use logtree::config::LoggerConfig;
/// use logtree::core::Level;
/// use logtree::handlers::ConsoleHandler;
/// use std::sync::Arc;
///
/// let logger = logtree::get_logger("svc.db");
/// logger.configure(
///     LoggerConfig::new()
///         .level(Level::Debug)
///         .handler(Arc::new(ConsoleHandler::new()))
///         .propagate(false),
/// );
/// ```
#[derive(Default)]
pub struct LoggerConfig {
    level: Option<Level>,
    levels: Option<Vec<Level>>,
    handlers: Vec<Arc<dyn Handler>>,
    propagate: Option<bool>,
}

impl LoggerConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the threshold to apply
    #[must_use]
    pub fn level(mut self, level: Level) -> Self {
        self.level = Some(level);
        self
    }

    /// Set the recognized level set to apply
    #[must_use]
    pub fn levels(mut self, levels: Vec<Level>) -> Self {
        self.levels = Some(levels);
        self
    }

    /// Add a handler to attach
    #[must_use]
    pub fn handler(mut self, handler: Arc<dyn Handler>) -> Self {
        self.handlers.push(handler);
        self
    }

    /// Set the propagate flag to apply
    #[must_use]
    pub fn propagate(mut self, propagate: bool) -> Self {
        self.propagate = Some(propagate);
        self
    }
}

impl Logger {
    /// Apply a configuration bundle to this logger.
    ///
    /// The level set is applied before the threshold so a threshold from the
    /// same bundle is validated against the new set.
    pub fn configure(&self, config: LoggerConfig) {
        if let Some(levels) = config.levels {
            self.set_levels(levels);
        }
        if let Some(level) = config.level {
            self.set_level(level);
        }
        for handler in config.handlers {
            self.add_handler(handler);
        }
        if let Some(propagate) = config.propagate {
            self.set_propagate(propagate);
        }
    }
}

/// Bootstrap convenience: give the registry's root logger one console
/// handler at the default `Info` threshold. Does nothing to loggers below
/// the root; they reach the console through propagation.
#[cfg(feature = "console")]
pub fn basic_config(registry: &crate::core::Registry) {
    use crate::handlers::ConsoleHandler;

    registry.root().configure(
        LoggerConfig::new()
            .level(Level::Info)
            .handler(Arc::new(ConsoleHandler::new())),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Registry;

    #[test]
    fn test_configure_applies_all_pieces() {
        let registry = Registry::new();
        let logger = registry.get("svc");
        logger.configure(
            LoggerConfig::new()
                .levels(vec![Level::Debug, Level::Info, Level::Severe])
                .level(Level::Debug)
                .propagate(false),
        );

        assert_eq!(logger.level(), Level::Debug);
        assert_eq!(
            logger.levels(),
            vec![Level::Debug, Level::Info, Level::Severe]
        );
        assert!(!logger.propagate());
    }

    #[test]
    fn test_configure_threshold_validated_against_new_set() {
        let registry = Registry::new();
        let logger = registry.get("svc");
        logger.configure(
            LoggerConfig::new()
                .levels(vec![Level::Info, Level::Severe])
                .level(Level::Debug),
        );

        // Debug is not in the new set, so the threshold is unchanged.
        assert_eq!(logger.level(), Level::Info);
    }

    #[test]
    fn test_empty_config_is_noop() {
        let registry = Registry::new();
        let logger = registry.get("svc");
        let level = logger.level();
        logger.configure(LoggerConfig::new());
        assert_eq!(logger.level(), level);
        assert!(logger.handlers().is_empty());
        assert!(logger.propagate());
    }

    #[cfg(feature = "console")]
    #[test]
    fn test_basic_config_attaches_one_console_handler() {
        let registry = Registry::new();
        basic_config(&registry);

        let root = registry.root();
        assert_eq!(root.level(), Level::Info);
        assert_eq!(root.handlers().len(), 1);
        assert_eq!(root.handlers()[0].name(), "console");
    }
}
