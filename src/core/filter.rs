//! Record filters

use super::record::Record;

/// A secondary admission predicate consulted after a logger's level check.
///
/// Implemented for any `Fn(&Record) -> bool` closure, so
/// `logger.set_filter(Some(Box::new(|r| ...)))` works without a newtype.
pub trait Filter: Send + Sync {
    fn is_loggable(&self, record: &Record) -> bool;
}

impl<F> Filter for F
where
    F: Fn(&Record) -> bool + Send + Sync,
{
    fn is_loggable(&self, record: &Record) -> bool {
        self(record)
    }
}
