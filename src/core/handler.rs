//! Handler trait for log output destinations

use super::{error::Result, level::Level, record::Record};

/// A sink that renders and emits admitted records.
///
/// A handler carries its own threshold, independent of any logger's: a record
/// fanned out by a logger is still dropped by a handler whose level rejects
/// it. Handlers are shared between loggers as `Arc<dyn Handler>`, so
/// `publish` takes `&self`; implementations that buffer use interior
/// mutability.
///
/// Publish failures are returned, not swallowed: the core propagates them to
/// the logging caller rather than silently eating them.
pub trait Handler: Send + Sync {
    /// This handler's own admission threshold.
    fn level(&self) -> Level;

    /// Whether this handler would actually publish the given record.
    fn is_loggable(&self, record: &Record) -> bool {
        record.level().rank() >= self.level().rank()
    }

    /// Render and emit a record.
    fn publish(&self, record: &Record) -> Result<()>;

    /// Flush any buffered output.
    fn flush(&self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ThresholdOnly(Level);

    impl Handler for ThresholdOnly {
        fn level(&self) -> Level {
            self.0
        }

        fn publish(&self, _record: &Record) -> Result<()> {
            Ok(())
        }

        fn name(&self) -> &str {
            "threshold-only"
        }
    }

    #[test]
    fn test_default_is_loggable() {
        let handler = ThresholdOnly(Level::Warning);
        let below = Record::new("t", Level::Info, "x", vec![]);
        let at = Record::new("t", Level::Warning, "x", vec![]);
        let above = Record::new("t", Level::Severe, "x", vec![]);
        assert!(!handler.is_loggable(&below));
        assert!(handler.is_loggable(&at));
        assert!(handler.is_loggable(&above));
    }

    #[test]
    fn test_all_threshold_admits_everything() {
        let handler = ThresholdOnly(Level::All);
        let record = Record::new("t", Level::Trace, "x", vec![]);
        assert!(handler.is_loggable(&record));
    }
}
