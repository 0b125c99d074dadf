//! In-memory sink
//!
//! Clones share one buffer, so a caller can hand one clone to a logger and
//! read everything it wrote through another.

use super::Sink;
use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    data: Arc<Mutex<Vec<u8>>>,
    tty: bool,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report `tty` from [`Sink::is_tty`], as if attached to a terminal.
    #[must_use]
    pub fn with_tty(mut self, tty: bool) -> Self {
        self.tty = tty;
        self
    }

    pub fn contents(&self) -> Vec<u8> {
        self.data.lock().clone()
    }

    pub fn to_string_lossy(&self) -> String {
        String::from_utf8_lossy(&self.data.lock()).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.to_string_lossy().lines().map(str::to_owned).collect()
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

impl Write for MemorySink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.data.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Sink for MemorySink {
    fn is_tty(&self) -> bool {
        self.tty
    }
}
