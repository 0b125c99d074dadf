//! ANSI color decoration
//!
//! Escape sequences are fixed at compile time: on Windows consoles every
//! sequence is empty, so colored and plain output are byte-identical there.

use super::buffer::Buffer;
use std::fmt;
use std::ops::{Deref, DerefMut};

#[cfg(not(windows))]
mod codes {
    pub const OFF: &[u8] = b"\x1b[0m";
    pub const RED: &[u8] = b"\x1b[0;31m";
    pub const GREEN: &[u8] = b"\x1b[0;32m";
    pub const ORANGE: &[u8] = b"\x1b[0;33m";
    pub const BLUE: &[u8] = b"\x1b[0;34m";
    pub const PURPLE: &[u8] = b"\x1b[0;35m";
    pub const CYAN: &[u8] = b"\x1b[0;36m";
    pub const GRAY: &[u8] = b"\x1b[0;37m";
}

#[cfg(windows)]
mod codes {
    pub const OFF: &[u8] = b"";
    pub const RED: &[u8] = b"";
    pub const GREEN: &[u8] = b"";
    pub const ORANGE: &[u8] = b"";
    pub const BLUE: &[u8] = b"";
    pub const PURPLE: &[u8] = b"";
    pub const CYAN: &[u8] = b"";
    pub const GRAY: &[u8] = b"";
}

pub use codes::{BLUE, CYAN, GRAY, GREEN, OFF, ORANGE, PURPLE, RED};

/// Whether this build emits real escape sequences.
pub const ANSI_SUPPORTED: bool = !OFF.is_empty();

/// A [`Buffer`] that can also append color escapes.
#[derive(Debug, Default, Clone)]
pub struct ColorBuffer {
    buf: Buffer,
}

impl ColorBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Buffer::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn off(&mut self) {
        self.buf.append(OFF);
    }

    #[inline]
    pub fn red(&mut self) {
        self.buf.append(RED);
    }

    #[inline]
    pub fn green(&mut self) {
        self.buf.append(GREEN);
    }

    #[inline]
    pub fn orange(&mut self) {
        self.buf.append(ORANGE);
    }

    #[inline]
    pub fn blue(&mut self) {
        self.buf.append(BLUE);
    }

    #[inline]
    pub fn purple(&mut self) {
        self.buf.append(PURPLE);
    }

    #[inline]
    pub fn cyan(&mut self) {
        self.buf.append(CYAN);
    }

    #[inline]
    pub fn gray(&mut self) {
        self.buf.append(GRAY);
    }
}

impl fmt::Write for ColorBuffer {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.buf.append(s.as_bytes());
        Ok(())
    }
}

impl Deref for ColorBuffer {
    type Target = Buffer;

    fn deref(&self) -> &Buffer {
        &self.buf
    }
}

impl DerefMut for ColorBuffer {
    fn deref_mut(&mut self) -> &mut Buffer {
        &mut self.buf
    }
}

fn mix(data: &[u8], color: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(color.len() + data.len() + OFF.len());
    out.extend_from_slice(color);
    out.extend_from_slice(data);
    out.extend_from_slice(OFF);
    out
}

/// Wrap `data` in red followed by a reset.
pub fn red(data: &[u8]) -> Vec<u8> {
    mix(data, RED)
}

pub fn green(data: &[u8]) -> Vec<u8> {
    mix(data, GREEN)
}

pub fn orange(data: &[u8]) -> Vec<u8> {
    mix(data, ORANGE)
}

pub fn blue(data: &[u8]) -> Vec<u8> {
    mix(data, BLUE)
}

pub fn purple(data: &[u8]) -> Vec<u8> {
    mix(data, PURPLE)
}

pub fn cyan(data: &[u8]) -> Vec<u8> {
    mix(data, CYAN)
}

pub fn gray(data: &[u8]) -> Vec<u8> {
    mix(data, GRAY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_buffer_spans() {
        let mut buf = ColorBuffer::new();
        buf.blue();
        buf.append(b"2021/05/16");
        buf.off();

        let mut expected = BLUE.to_vec();
        expected.extend_from_slice(b"2021/05/16");
        expected.extend_from_slice(OFF);
        assert_eq!(buf.bytes(), expected.as_slice());
    }

    #[test]
    fn test_mixers_wrap_data() {
        let colored = red(b"[ERROR] ");
        assert!(colored.starts_with(RED));
        assert!(colored.ends_with(OFF));
        assert_eq!(&colored[RED.len()..colored.len() - OFF.len()], b"[ERROR] ");
    }

    #[cfg(not(windows))]
    #[test]
    fn test_ansi_codes() {
        assert!(ANSI_SUPPORTED);
        assert_eq!(orange(b"x"), b"\x1b[0;33mx\x1b[0m".to_vec());
        assert_eq!(cyan(b""), b"\x1b[0;36m\x1b[0m".to_vec());
    }

    #[cfg(windows)]
    #[test]
    fn test_no_ansi_codes() {
        assert!(!ANSI_SUPPORTED);
        assert_eq!(green(b"[INFO]  "), b"[INFO]  ".to_vec());
    }
}
