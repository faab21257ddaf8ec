//! # Leveled Log
//!
//! A small console logger that gates messages by a severity threshold.
//!
//! * **Three severities**: `Error` < `Warning` < `Info`, ranked 0, 1 and 2
//! * **One line per message**: `[ERROR]: ...`, `[WARNING]: ...`, `[INFO]: ...`
//! * **Pluggable sink**: standard output by default, any `std::io::Write` otherwise
//!
//! ## Filtering rule
//!
//! A message of severity `S` is written when `S.rank() <= threshold.rank()`. The
//! threshold starts at `Info`, which lets everything through. Lowering it to `Error`
//! leaves only errors, and errors are written under every threshold.
//!
//! ## Main Components
//!
//! * `LeveledLogger`: the gated writer, owned by its caller
//! * `Severity`: the closed level enumeration and its conversions to `log`/`tracing` levels
//! * `LoggerConfig`: builds a logger from `LEVELED_LOG_LEVEL`
//! * `LogBridge`: installs a logger behind the `log` facade
//! * `SharedBuffer`: an in-memory sink for capturing output
//!
//! ## Quick Start
//!
//! ```
//! use leveled_log::{LeveledLogger, Severity};
//!
//! let mut logger = LeveledLogger::new();
//! logger.set_level(Severity::Warning);
//! logger.warn("disk low");     // [WARNING]: disk low
//! logger.info("cache hit");    // suppressed
//! logger.error("disk full");   // [ERROR]: disk full
//! ```

pub mod bridge;
pub mod config;
pub mod leveled_logger;
pub mod severity;
pub mod sink;

pub use bridge::LogBridge;
pub use config::{ConfigError, LoggerConfig, LEVEL_ENV_VAR};
pub use leveled_logger::{format_line, LeveledLogger};
pub use severity::{InvalidRank, ParseSeverityError, Severity};
pub use sink::SharedBuffer;
