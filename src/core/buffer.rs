//! Reusable line buffer
//!
//! An append-only byte buffer that is reset (not freed) between log lines,
//! with direct integer-to-ASCII encoding so the hot path never goes through
//! an intermediate `String`.

use std::fmt;

/// Largest number of decimal digits `append_int` will produce.
///
/// Twenty digits hold every `u64`, so padding beyond this is clamped.
pub const MAX_INT_DIGITS: usize = 20;

#[derive(Debug, Default, Clone)]
pub struct Buffer {
    bytes: Vec<u8>,
}

impl Buffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(capacity),
        }
    }

    /// Drop the contents, keeping the allocation for the next line.
    #[inline]
    pub fn reset(&mut self) {
        self.bytes.clear();
    }

    #[inline]
    pub fn append(&mut self, data: &[u8]) {
        self.bytes.extend_from_slice(data);
    }

    #[inline]
    pub fn append_byte(&mut self, byte: u8) {
        self.bytes.push(byte);
    }

    /// Append the decimal form of `value`, left-padded with zeros to at
    /// least `width` digits.
    ///
    /// `width` is a minimum: a wider value is never truncated. Widths above
    /// [`MAX_INT_DIGITS`] are clamped.
    ///
    /// # Examples
    ///
    /// ```
    /// use console_logger::core::Buffer;
    ///
    /// let mut buf = Buffer::new();
    /// buf.append_int(5, 2);
    /// buf.append_byte(b'|');
    /// buf.append_int(1234, 2);
    /// assert_eq!(buf.bytes(), b"05|1234");
    /// ```
    pub fn append_int(&mut self, value: u64, width: usize) {
        let mut repr = [0u8; MAX_INT_DIGITS];
        let mut pos = repr.len() - 1;
        let mut val = value;
        let mut width = width.min(MAX_INT_DIGITS);

        while val >= 10 || width > 1 {
            let quotient = val / 10;
            repr[pos] = b'0' + (val - quotient * 10) as u8;
            val = quotient;
            pos -= 1;
            width = width.saturating_sub(1);
        }
        repr[pos] = b'0' + val as u8;

        self.append(&repr[pos..]);
    }

    /// Current contents. Only valid until the next [`reset`](Self::reset).
    #[inline]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.bytes.capacity()
    }

    #[inline]
    pub fn last(&self) -> Option<u8> {
        self.bytes.last().copied()
    }
}

impl fmt::Write for Buffer {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.append(s.as_bytes());
        Ok(())
    }
}
