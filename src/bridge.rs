use std::io::{Stdout, Write};

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};
use parking_lot::Mutex;

use crate::leveled_logger::{report_dropped_line, LeveledLogger, DIAGNOSTIC_TARGET};
use crate::severity::Severity;

/// Routes the `log` facade into a [`LeveledLogger`].
///
/// The wrapped logger sits behind a mutex, so the bridge can be shared by every
/// thread that uses `log::info!` and friends. Records are mapped to a [`Severity`]
/// (`Debug` and `Trace` fold into `Info`) and then go through the same threshold
/// and line format as direct calls.
///
/// # Examples
///
/// ```
/// # use leveled_log::{LeveledLogger, LogBridge, Severity, SharedBuffer};
/// # use log::Log;
/// let out = SharedBuffer::new();
/// let bridge = LogBridge::new(LeveledLogger::with_writer(out.clone()));
/// bridge.set_level(Severity::Error);
///
/// bridge.log(&log::Record::builder()
///     .level(log::Level::Error)
///     .args(format_args!("checksum mismatch"))
///     .build());
/// assert_eq!(out.contents(), "[ERROR]: checksum mismatch\n");
/// ```
pub struct LogBridge<W: Write = Stdout> {
    inner: Mutex<LeveledLogger<W>>,
}

impl<W: Write> LogBridge<W> {
    pub fn new(logger: LeveledLogger<W>) -> Self {
        Self {
            inner: Mutex::new(logger),
        }
    }

    pub fn set_level(&self, level: Severity) {
        self.inner.lock().set_level(level);
    }

    pub fn level(&self) -> Severity {
        self.inner.lock().level()
    }

    pub fn into_inner(self) -> LeveledLogger<W> {
        self.inner.into_inner()
    }
}

impl<W: Write + Send + 'static> LogBridge<W> {
    /// Registers this bridge as the process-wide `log` logger.
    ///
    /// The facade's max level is opened fully; the bridge's own threshold does all the
    /// filtering. Fails if a logger has already been installed.
    pub fn install(self) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(LevelFilter::Trace);
        Ok(())
    }
}

impl<W: Write + Send> Log for LogBridge<W> {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        self.inner.lock().is_enabled(Severity::from(metadata.level()))
    }

    // Failures are reported only after the guard drops: with tracing's `log` feature the
    // report re-enters this bridge.
    fn log(&self, record: &Record<'_>) {
        let severity = Severity::from(record.level());
        let result = self.inner.lock().try_emit(severity, record.args());
        if let Err(err) = result {
            // A failed report of a failed write would loop forever.
            if record.target() != DIAGNOSTIC_TARGET {
                report_dropped_line(severity, &err);
            }
        }
    }

    fn flush(&self) {
        let result = self.inner.lock().flush();
        if let Err(err) = result {
            tracing::warn!(target: DIAGNOSTIC_TARGET, error = %err, "failed to flush log sink");
        }
    }
}
