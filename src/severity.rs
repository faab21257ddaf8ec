use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Ordered category of diagnostic importance.
///
/// Levels are ranked from least to most verbose: `Error` (0) < `Warning` (1) < `Info` (2).
/// A [`LeveledLogger`](crate::LeveledLogger) configured with a threshold `T` emits a
/// message of severity `S` only when `S.rank() <= T.rank()`.
///
/// # Examples
///
/// ```
/// # use leveled_log::Severity;
/// assert!(Severity::Error < Severity::Warning);
/// assert!(Severity::Info.permits(Severity::Warning));
/// assert!(!Severity::Error.permits(Severity::Warning));
/// assert_eq!("warn".parse::<Severity>().unwrap(), Severity::Warning);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Severity {
    Error = 0,
    Warning = 1,
    #[default]
    Info = 2,
}

impl Severity {
    /// Every severity, in rank order.
    pub const ALL: [Severity; 3] = [Severity::Error, Severity::Warning, Severity::Info];

    #[inline]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Tag written between brackets in front of each emitted line.
    pub const fn label(self) -> &'static str {
        match self {
            Severity::Error => "ERROR",
            Severity::Warning => "WARNING",
            Severity::Info => "INFO",
        }
    }

    /// Returns true if a message of severity `message` passes when `self` is the threshold.
    ///
    /// The comparison is `message.rank() <= self.rank()`, so `Error` always passes and
    /// raising the threshold lets more kinds of message through.
    #[inline]
    pub const fn permits(self, message: Severity) -> bool {
        message.rank() <= self.rank()
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when a string does not name a severity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown severity {input:?}, expected one of: error, warning, info")]
pub struct ParseSeverityError {
    pub input: String,
}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "error" => Ok(Severity::Error),
            "warning" | "warn" => Ok(Severity::Warning),
            "info" => Ok(Severity::Info),
            _ => Err(ParseSeverityError { input: s.to_owned() }),
        }
    }
}

/// Returned when converting a rank outside `0..=2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("severity rank {0} is out of range (0..=2)")]
pub struct InvalidRank(pub u8);

impl TryFrom<u8> for Severity {
    type Error = InvalidRank;

    fn try_from(rank: u8) -> Result<Self, InvalidRank> {
        Severity::ALL
            .get(usize::from(rank))
            .copied()
            .ok_or(InvalidRank(rank))
    }
}

impl From<Severity> for log::Level {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Error => log::Level::Error,
            Severity::Warning => log::Level::Warn,
            Severity::Info => log::Level::Info,
        }
    }
}

impl From<Severity> for log::LevelFilter {
    fn from(severity: Severity) -> Self {
        log::Level::from(severity).to_level_filter()
    }
}

impl From<Severity> for tracing::Level {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Error => tracing::Level::ERROR,
            Severity::Warning => tracing::Level::WARN,
            Severity::Info => tracing::Level::INFO,
        }
    }
}

// Debug and Trace have no counterpart here; they fold into the most verbose level.
impl From<log::Level> for Severity {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => Severity::Error,
            log::Level::Warn => Severity::Warning,
            log::Level::Info | log::Level::Debug | log::Level::Trace => Severity::Info,
        }
    }
}
