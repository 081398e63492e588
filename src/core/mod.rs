//! Core logger types and traits

pub mod error;
pub mod filter;
pub mod formatter;
pub mod handler;
pub mod level;
pub mod logger;
pub mod record;
pub mod registry;
pub mod timestamp;

pub use error::{LogError, Result};
pub use filter::Filter;
pub use formatter::Formatter;
pub use handler::Handler;
pub use level::{Level, ALL_LEVELS, STANDARD_LEVELS};
pub use logger::Logger;
pub use record::{Payload, Record};
pub use registry::{Registry, NAME_SEPARATOR, ROOT_LOGGER_NAME};
pub use timestamp::TimestampFormat;
