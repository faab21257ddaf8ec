use std::fmt::Display;
use std::io::{self, Stdout, Write};

use crate::severity::Severity;

/// Filters messages by a severity threshold and writes them as text lines.
///
/// Each emitted message becomes exactly one line of the form `[LABEL]: message`,
/// where `LABEL` is `ERROR`, `WARNING` or `INFO`. A message is emitted only when
/// [`Severity::permits`] holds for the current threshold, which starts at
/// [`Severity::Info`].
///
/// # Ownership
///
/// A logger is a plain value owned by its caller and mutated through `&mut self`.
/// It carries no internal locking; wrap it in a [`LogBridge`](crate::LogBridge)
/// to share it between threads.
///
/// # Sinks
///
/// `LeveledLogger::new()` writes to standard output. Any other [`Write`] target can
/// be supplied through [`with_writer`](Self::with_writer). Sink failures never reach
/// callers of `warn`, `info`, `error` or `emit`: the line is dropped and the failure is
/// reported as a `tracing` event. [`try_emit`](Self::try_emit) returns the error instead.
///
/// # Examples
///
/// ```
/// # use leveled_log::{LeveledLogger, Severity, SharedBuffer};
/// let out = SharedBuffer::new();
/// let mut logger = LeveledLogger::with_writer(out.clone());
///
/// logger.set_level(Severity::Warning);
/// logger.warn("disk low");
/// logger.info("cache hit");
///
/// assert_eq!(out.contents(), "[WARNING]: disk low\n");
/// ```
pub struct LeveledLogger<W: Write = Stdout> {
    threshold: Severity,
    sink: W,
}

impl LeveledLogger<Stdout> {
    /// Creates a logger writing to standard output with threshold `Info`.
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for LeveledLogger<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> LeveledLogger<W> {
    /// Creates a logger writing to `sink` with threshold `Info`.
    pub fn with_writer(sink: W) -> Self {
        Self {
            threshold: Severity::default(),
            sink,
        }
    }

    /// Replaces the current threshold.
    pub fn set_level(&mut self, level: Severity) {
        self.threshold = level;
    }

    pub fn level(&self) -> Severity {
        self.threshold
    }

    #[inline]
    pub fn is_enabled(&self, severity: Severity) -> bool {
        self.threshold.permits(severity)
    }

    pub fn warn(&mut self, message: impl Display) {
        self.emit(Severity::Warning, message);
    }

    pub fn info(&mut self, message: impl Display) {
        self.emit(Severity::Info, message);
    }

    pub fn error(&mut self, message: impl Display) {
        self.emit(Severity::Error, message);
    }

    /// Writes `message` at `severity` if the threshold permits it.
    ///
    /// Returns `true` when a line reached the sink. Returns `false` when the message was
    /// filtered out or the sink failed.
    pub fn emit(&mut self, severity: Severity, message: impl Display) -> bool {
        match self.try_emit(severity, message) {
            Ok(emitted) => emitted,
            Err(err) => {
                report_dropped_line(severity, &err);
                false
            }
        }
    }

    /// Like [`emit`](Self::emit), but hands sink failures back instead of reporting them.
    ///
    /// `Ok(false)` means the threshold filtered the message out.
    pub fn try_emit(&mut self, severity: Severity, message: impl Display) -> io::Result<bool> {
        if !self.is_enabled(severity) {
            return Ok(false);
        }
        self.write_line(&format_line(severity, message))?;
        Ok(true)
    }

    /// Flushes the underlying sink.
    pub fn flush(&mut self) -> io::Result<()> {
        self.sink.flush()
    }

    pub fn get_ref(&self) -> &W {
        &self.sink
    }

    /// Consumes the logger, returning the sink.
    pub fn into_inner(self) -> W {
        self.sink
    }

    // One write per line keeps lines whole on shared sinks; flush mirrors a line-buffered console.
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.sink.write_all(line.as_bytes())?;
        self.sink.flush()
    }
}

/// `tracing` target for the crate's own diagnostics.
pub(crate) const DIAGNOSTIC_TARGET: &str = "leveled_log";

pub(crate) fn report_dropped_line(severity: Severity, err: &io::Error) {
    tracing::warn!(
        target: DIAGNOSTIC_TARGET,
        severity = %severity,
        error = %err,
        "dropped log line, sink write failed"
    );
}

/// Formats the exact line a logger writes for `message` at `severity`, terminator included.
///
/// ```
/// # use leveled_log::{format_line, Severity};
/// assert_eq!(format_line(Severity::Error, "boom"), "[ERROR]: boom\n");
/// ```
pub fn format_line(severity: Severity, message: impl Display) -> String {
    format!("[{}]: {}\n", severity.label(), message)
}

/// Emits a formatted message through a [`LeveledLogger`] without building the `String` first.
///
/// Evaluates to the `bool` returned by [`LeveledLogger::emit`].
///
/// # Examples
///
/// ```
/// # use leveled_log::{leveled, LeveledLogger, Severity, SharedBuffer};
/// let out = SharedBuffer::new();
/// let mut logger = LeveledLogger::with_writer(out.clone());
///
/// let pct = 93;
/// assert!(leveled!(logger, Severity::Warning, "disk {}% full", pct));
/// assert_eq!(out.contents(), "[WARNING]: disk 93% full\n");
/// ```
#[macro_export]
macro_rules! leveled {
    ($logger:expr, $severity:expr, $($arg:tt)+) => {
        $logger.emit($severity, ::std::format_args!($($arg)+))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line_prefixes() {
        assert_eq!(format_line(Severity::Warning, "x"), "[WARNING]: x\n");
        assert_eq!(format_line(Severity::Info, "x"), "[INFO]: x\n");
        assert_eq!(format_line(Severity::Error, "x"), "[ERROR]: x\n");
    }

    #[test]
    fn test_format_line_passes_text_through() {
        assert_eq!(format_line(Severity::Info, ""), "[INFO]: \n");
        assert_eq!(format_line(Severity::Info, "a\nb"), "[INFO]: a\nb\n");
        assert_eq!(format_line(Severity::Info, "{}%s\\"), "[INFO]: {}%s\\\n");
    }

    #[test]
    fn test_vec_sink() {
        let mut logger = LeveledLogger::with_writer(Vec::new());
        logger.info("one");
        logger.set_level(Severity::Error);
        logger.info("two");
        logger.error("three");
        assert_eq!(logger.get_ref().len(), 27);
        assert_eq!(logger.into_inner(), b"[INFO]: one\n[ERROR]: three\n");
    }

    #[test]
    fn test_try_emit_reports_filtering_and_failures() {
        struct Closed;
        impl Write for Closed {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::ErrorKind::BrokenPipe.into())
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let mut logger = LeveledLogger::with_writer(Closed);
        logger.set_level(Severity::Error);
        assert!(matches!(logger.try_emit(Severity::Info, "x"), Ok(false)));
        let err = logger.try_emit(Severity::Error, "x").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn test_new_starts_at_info() {
        let logger = LeveledLogger::new();
        assert_eq!(logger.level(), Severity::Info);
    }
}
