//! Formatter trait

use super::record::Record;

/// A pure renderer from [`Record`] to displayable text.
///
/// Formatters own message parameter interpolation: records store the raw
/// message and its positional arguments separately, and each handler's
/// formatter decides how to combine them.
pub trait Formatter: Send + Sync {
    fn format(&self, record: &Record) -> String;
}
