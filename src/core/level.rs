//! Severity level definitions

use super::error::LogError;
use std::fmt;
use std::str::FromStr;

/// An ordered severity value gating whether a record is processed.
///
/// Levels are compared purely by rank. `All` and `Off` are sentinels: they
/// are valid thresholds but never message severities, so loggers expose no
/// convenience method for them.
///
/// Variants are declared in ascending rank order so the derived `Ord`
/// matches [`Level::rank`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Level {
    /// Admits every record. Sentinel, minimum rank.
    All,
    /// Fine-grained tracing messages.
    Trace,
    /// Debug messages.
    Debug,
    /// Static configuration messages.
    Config,
    /// Informational messages.
    #[default]
    Info,
    /// A potential problem.
    Warning,
    /// A serious failure.
    Severe,
    /// Admits nothing. Sentinel, maximum rank.
    Off,
}

/// The standard (non-sentinel) levels in ascending rank order.
pub const STANDARD_LEVELS: [Level; 6] = [
    Level::Trace,
    Level::Debug,
    Level::Config,
    Level::Info,
    Level::Warning,
    Level::Severe,
];

/// Every level, sentinels included, in ascending rank order.
pub const ALL_LEVELS: [Level; 8] = [
    Level::All,
    Level::Trace,
    Level::Debug,
    Level::Config,
    Level::Info,
    Level::Warning,
    Level::Severe,
    Level::Off,
];

impl Level {
    /// The integer rank of this level. Enabling logging at a given rank also
    /// enables logging at all higher ranks.
    #[must_use]
    pub fn rank(&self) -> i32 {
        match self {
            Level::All => i32::MIN,
            Level::Trace => 5,
            Level::Debug => 10,
            Level::Config => 20,
            Level::Info => 30,
            Level::Warning => 40,
            Level::Severe => 50,
            Level::Off => i32::MAX,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::All => "ALL",
            Level::Trace => "TRACE",
            Level::Debug => "DEBUG",
            Level::Config => "CONFIG",
            Level::Info => "INFO",
            Level::Warning => "WARNING",
            Level::Severe => "SEVERE",
            Level::Off => "OFF",
        }
    }

    /// Whether this level is one of the `All`/`Off` sentinels, which exist
    /// only as thresholds.
    #[must_use]
    pub fn is_sentinel(&self) -> bool {
        matches!(self, Level::All | Level::Off)
    }

    /// The color used by the console handler for this level.
    #[cfg(feature = "console")]
    pub fn color(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            Level::All | Level::Trace => BrightBlack,
            Level::Debug => Blue,
            Level::Config => Cyan,
            Level::Info => Green,
            Level::Warning => Yellow,
            Level::Severe | Level::Off => Red,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Level {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "ALL" => Ok(Level::All),
            "TRACE" => Ok(Level::Trace),
            "DEBUG" => Ok(Level::Debug),
            "CONFIG" => Ok(Level::Config),
            "INFO" => Ok(Level::Info),
            "WARN" | "WARNING" => Ok(Level::Warning),
            "SEVERE" => Ok(Level::Severe),
            "OFF" => Ok(Level::Off),
            _ => Err(LogError::InvalidLevelName {
                name: s.to_string(),
            }),
        }
    }
}

impl TryFrom<i32> for Level {
    type Error = LogError;

    /// Resolve a level from its rank. Ranks that do not name a defined level
    /// yield [`LogError::InvalidLevel`] and produce no usable instance.
    fn try_from(rank: i32) -> Result<Self, Self::Error> {
        ALL_LEVELS
            .into_iter()
            .find(|level| level.rank() == rank)
            .ok_or(LogError::InvalidLevel { rank })
    }
}
