use std::env;
use std::io::{Stdout, Write};

use thiserror::Error;

use crate::leveled_logger::{LeveledLogger, DIAGNOSTIC_TARGET};
use crate::severity::{ParseSeverityError, Severity};

/// Environment variable read by [`LoggerConfig::from_env`].
pub const LEVEL_ENV_VAR: &str = "LEVELED_LOG_LEVEL";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {var}: {source}")]
    InvalidLevel {
        var: &'static str,
        value: String,
        #[source]
        source: ParseSeverityError,
    },
}

/// Settings used to construct a [`LeveledLogger`].
///
/// # Examples
///
/// ```
/// # use leveled_log::{LoggerConfig, Severity, SharedBuffer};
/// let config = LoggerConfig::from_lookup(|_| Some("warning".to_string())).unwrap();
/// assert_eq!(config.level, Severity::Warning);
///
/// let out = SharedBuffer::new();
/// let mut logger = config.build_with_writer(out.clone());
/// logger.info("suppressed");
/// assert!(out.is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoggerConfig {
    pub level: Severity,
}

impl LoggerConfig {
    pub fn with_level(mut self, level: Severity) -> Self {
        self.level = level;
        self
    }

    /// Reads the threshold from `LEVELED_LOG_LEVEL`.
    ///
    /// A missing or blank variable keeps the default threshold.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) but resolves variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(value) = lookup(LEVEL_ENV_VAR).filter(|v| !v.trim().is_empty()) {
            config.level = value.parse::<Severity>().map_err(|source| ConfigError::InvalidLevel {
                var: LEVEL_ENV_VAR,
                value,
                source,
            })?;
        }
        tracing::debug!(target: DIAGNOSTIC_TARGET, level = %config.level, "resolved logger config");
        Ok(config)
    }

    pub fn build(&self) -> LeveledLogger<Stdout> {
        self.build_with_writer(std::io::stdout())
    }

    pub fn build_with_writer<W: Write>(&self, sink: W) -> LeveledLogger<W> {
        let mut logger = LeveledLogger::with_writer(sink);
        logger.set_level(self.level);
        logger
    }
}
