use std::io::{self, Write};
use std::sync::Arc;

use parking_lot::Mutex;

/// In-memory sink whose clones all share one byte buffer.
///
/// Hand one clone to a [`LeveledLogger`](crate::LeveledLogger) and keep another to
/// read back what was emitted. Safe to share between threads.
///
/// ```
/// # use leveled_log::{LeveledLogger, SharedBuffer};
/// let out = SharedBuffer::new();
/// let mut logger = LeveledLogger::with_writer(out.clone());
/// logger.error("boom");
/// assert_eq!(out.lines(), vec!["[ERROR]: boom"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer {
    data: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, decoded as UTF-8 (invalid sequences replaced).
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.data.lock()).into_owned()
    }

    /// Written text split on `\n`, without terminators.
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_owned).collect()
    }

    pub fn len(&self) -> usize {
        self.data.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.lock().is_empty()
    }

    pub fn clear(&self) {
        self.data.lock().clear();
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.data.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        self.data.lock().extend_from_slice(buf);
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
