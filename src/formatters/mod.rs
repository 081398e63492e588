//! Formatter implementations

pub mod simple;

pub use simple::SimpleFormatter;

// Re-export the trait for convenience.
pub use crate::core::Formatter;
