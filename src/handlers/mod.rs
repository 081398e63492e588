//! Handler implementations

#[cfg(feature = "console")]
pub mod console;
#[cfg(feature = "file")]
pub mod file;

#[cfg(feature = "console")]
pub use console::ConsoleHandler;
#[cfg(feature = "file")]
pub use file::FileHandler;

// Re-export the trait for convenience.
pub use crate::core::Handler;
