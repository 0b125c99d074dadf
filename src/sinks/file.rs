//! File sink

use super::Sink;
use crate::core::Result;
use std::fs::{File, OpenOptions};
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};

impl Sink for File {
    fn is_tty(&self) -> bool {
        IsTerminal::is_terminal(self)
    }
}

/// Appends lines to a file, creating it if missing.
///
/// Writes go straight to the file: each log line is already assembled in
/// the logger's buffer, so no second layer of buffering is added.
#[derive(Debug)]
pub struct FileSink {
    file: File,
    path: PathBuf,
}

impl FileSink {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok(Self { file, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Write for FileSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file.write(buf)
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        self.file.write_all(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

impl Sink for FileSink {
    fn is_tty(&self) -> bool {
        self.file.is_tty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_appends() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("app.log");

        {
            let mut sink = FileSink::open(&path).expect("Failed to open sink");
            sink.write_all(b"first\n").unwrap();
        }
        {
            let mut sink = FileSink::open(&path).expect("Failed to reopen sink");
            sink.write_all(b"second\n").unwrap();
            assert!(!sink.is_tty());
            assert_eq!(sink.path(), path.as_path());
        }

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "first\nsecond\n");
    }

    #[test]
    fn test_open_missing_directory_fails() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("missing").join("app.log");

        let err = FileSink::open(&path).unwrap_err();
        assert!(err.is_io());
    }
}
