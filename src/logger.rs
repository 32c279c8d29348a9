//! Buffer logger writing into a user-provided byte slice
//!
//! The logger owns no memory. It borrows the caller's buffer exclusively for
//! its lifetime and appends records sequentially with careful bounds
//! checking: a write either fits entirely or leaves the buffer untouched.

use crate::error::{Error, Result};
use crate::format::{format_int, IntFormat, IntValue, MAX_INT_TEXT};
use crate::TERMINATOR;

/// Zero-allocation logger over a caller-provided buffer
///
/// Text and integer records receive one trailing terminator byte; raw binary
/// writes are copied verbatim. A rejected write sets the sticky overflow
/// flag and advances nothing.
#[derive(Debug)]
pub struct Logger<'a> {
    buf: &'a mut [u8],
    pos: usize,
    overflow: bool,
    int_format: IntFormat,
}

/// One value in a fluent logging chain
///
/// Conversions exist from byte slices, string slices, every primitive
/// integer type, and [`IntFormat`], so call sites can pass values directly
/// to [`Logger::push`].
#[derive(Debug, Clone, Copy)]
pub enum Item<'a> {
    /// Raw bytes, written without a terminator
    Bytes(&'a [u8]),
    /// Text, written with a trailing terminator
    Text(&'a str),
    /// Integer, formatted per the active number format
    Int(IntValue),
    /// Switches the number format mid-chain; produces no bytes
    Format(IntFormat),
}

impl<'a> From<&'a [u8]> for Item<'a> {
    #[inline]
    fn from(bytes: &'a [u8]) -> Self {
        Item::Bytes(bytes)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Item<'a> {
    #[inline]
    fn from(bytes: &'a [u8; N]) -> Self {
        Item::Bytes(bytes)
    }
}

impl<'a> From<&'a str> for Item<'a> {
    #[inline]
    fn from(text: &'a str) -> Self {
        Item::Text(text)
    }
}

impl From<IntFormat> for Item<'_> {
    #[inline]
    fn from(format: IntFormat) -> Self {
        Item::Format(format)
    }
}

macro_rules! impl_item_from_int {
    ($($t:ty),*) => {$(
        impl From<$t> for Item<'_> {
            #[inline]
            fn from(value: $t) -> Self {
                Item::Int(IntValue::from(value))
            }
        }
    )*};
}

impl_item_from_int!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

impl<'a> Logger<'a> {
    /// Create a logger over the given buffer
    ///
    /// Existing contents are neither inspected nor cleared. An empty buffer
    /// is legal; every write against it overflows.
    #[inline]
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self {
            buf,
            pos: 0,
            overflow: false,
            int_format: IntFormat::Decimal,
        }
    }

    /// Number of bytes written since construction or the last reset
    #[inline]
    pub fn bytes_written(&self) -> usize {
        self.pos
    }

    /// Bytes still available before a write overflows
    #[inline]
    pub fn remaining_capacity(&self) -> usize {
        self.buf.len().saturating_sub(self.pos)
    }

    /// Whether any write has been rejected for lack of capacity
    ///
    /// The flag is sticky: once set it survives subsequent successful writes
    /// until [`reset`](Self::reset) clears it.
    #[inline]
    pub fn has_overflowed(&self) -> bool {
        self.overflow
    }

    /// Restart writing from the beginning of the buffer
    ///
    /// Clears the overflow flag and moves the cursor to 0. The buffer
    /// contents and the active number format are left untouched.
    #[inline]
    pub fn reset(&mut self) {
        self.pos = 0;
        self.overflow = false;
    }

    /// View of the entire underlying buffer
    #[inline]
    pub fn data(&self) -> &[u8] {
        self.buf
    }

    /// The written prefix of the buffer
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.buf[..self.pos]
    }

    /// Write raw bytes verbatim, no terminator
    ///
    /// Fails with [`Error::Overflow`] and writes nothing if `data` does not
    /// fit the remaining capacity.
    #[inline]
    pub fn log_bytes(&mut self, data: &[u8]) -> Result<()> {
        if data.len() > self.remaining_capacity() {
            self.overflow = true;
            return Err(Error::Overflow);
        }
        self.buf[self.pos..self.pos + data.len()].copy_from_slice(data);
        self.pos += data.len();
        Ok(())
    }

    /// Write a string followed by one terminator byte
    ///
    /// Requires `text.len() + 1` bytes of remaining capacity.
    #[inline]
    pub fn log_str(&mut self, text: &str) -> Result<()> {
        self.write_terminated(text.as_bytes())
    }

    /// Write an integer as text per the active number format
    ///
    /// The formatted digits are followed by one terminator byte, same as
    /// [`log_str`](Self::log_str). Accepts any primitive integer type.
    #[inline]
    pub fn log_int<T: Into<IntValue>>(&mut self, value: T) -> Result<()> {
        self.log_int_value(value.into(), self.int_format)
    }

    /// Write an integer with an explicit one-shot format
    ///
    /// The active number format latch is not modified.
    #[inline]
    pub fn log_int_as<T: Into<IntValue>>(&mut self, value: T, format: IntFormat) -> Result<()> {
        self.log_int_value(value.into(), format)
    }

    /// Set the number format for subsequent integer writes
    ///
    /// Returns `&mut self` so a write can follow directly:
    /// `logger.set_int_format(IntFormat::HexLower).log_int(16)`.
    #[inline]
    pub fn set_int_format(&mut self, format: IntFormat) -> &mut Self {
        self.int_format = format;
        self
    }

    /// The currently active number format
    #[inline]
    pub fn int_format(&self) -> IntFormat {
        self.int_format
    }

    /// Append one item in a fluent chain
    ///
    /// The per-item result is swallowed; an item that overflows is skipped
    /// while later items in the chain are still attempted, each checking
    /// capacity independently. Failures remain observable through
    /// [`has_overflowed`](Self::has_overflowed). A [`Item::Format`] item
    /// switches the number format, produces no bytes and cannot fail.
    ///
    /// ```rust
    /// # use logbuf::{IntFormat, Logger};
    /// let mut buf = [0u8; 32];
    /// let mut logger = Logger::new(&mut buf);
    /// logger
    ///     .push("Count: ")
    ///     .push(IntFormat::HexLower)
    ///     .push(255u32);
    /// assert!(!logger.has_overflowed());
    /// ```
    pub fn push<'b>(&mut self, item: impl Into<Item<'b>>) -> &mut Self {
        match item.into() {
            Item::Bytes(bytes) => {
                let _ = self.log_bytes(bytes);
            }
            Item::Text(text) => {
                let _ = self.log_str(text);
            }
            Item::Int(value) => {
                let _ = self.log_int_value(value, self.int_format);
            }
            Item::Format(format) => {
                self.int_format = format;
            }
        }
        self
    }

    fn log_int_value(&mut self, value: IntValue, format: IntFormat) -> Result<()> {
        let mut scratch = [0u8; MAX_INT_TEXT];
        let len = format_int(value, format, &mut scratch)?;
        self.write_terminated(&scratch[..len])
    }

    fn write_terminated(&mut self, data: &[u8]) -> Result<()> {
        let total = data.len() + 1;
        if total > self.remaining_capacity() {
            self.overflow = true;
            return Err(Error::Overflow);
        }
        self.buf[self.pos..self.pos + data.len()].copy_from_slice(data);
        self.buf[self.pos + data.len()] = TERMINATOR;
        self.pos += total;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_bytes() {
        let mut buf = [0u8; 100];
        let mut logger = Logger::new(&mut buf);

        let data = [0x01, 0x02, 0x03, 0x04];
        logger.log_bytes(&data).unwrap();
        assert_eq!(logger.bytes_written(), 4);
        assert_eq!(logger.as_slice(), &data);
    }

    #[test]
    fn test_log_str() {
        let mut buf = [0u8; 100];
        let mut logger = Logger::new(&mut buf);

        logger.log_str("Hello").unwrap();
        assert_eq!(logger.bytes_written(), 6);
        assert_eq!(logger.as_slice(), b"Hello\0");
    }

    #[test]
    fn test_log_int_decimal_default() {
        let mut buf = [0u8; 100];
        let mut logger = Logger::new(&mut buf);

        logger.log_int(42u32).unwrap();
        assert_eq!(logger.as_slice(), b"42\0");
        assert_eq!(logger.bytes_written(), 3);
    }

    #[test]
    fn test_log_int_negative() {
        let mut buf = [0u8; 100];
        let mut logger = Logger::new(&mut buf);

        logger.log_int(-123i32).unwrap();
        assert_eq!(logger.as_slice(), b"-123\0");
    }

    #[test]
    fn test_log_int_as_override_keeps_latch() {
        let mut buf = [0u8; 100];
        let mut logger = Logger::new(&mut buf);

        logger.log_int_as(255u32, IntFormat::HexUpper).unwrap();
        assert_eq!(logger.int_format(), IntFormat::Decimal);
        assert_eq!(logger.as_slice(), b"0XFF\0");
    }

    #[test]
    fn test_set_int_format_chains_into_write() {
        let mut buf = [0u8; 100];
        let mut logger = Logger::new(&mut buf);

        logger.set_int_format(IntFormat::HexLower).log_int(16u32).unwrap();
        assert_eq!(logger.as_slice(), b"0x10\0");
    }

    #[test]
    fn test_overflow_no_partial_write() {
        let mut buf = [0u8; 10];
        let mut logger = Logger::new(&mut buf);

        assert!(!logger.has_overflowed());
        logger.log_str("Hi").unwrap();
        assert_eq!(logger.bytes_written(), 3);
        assert_eq!(logger.remaining_capacity(), 7);

        // Needs 9 bytes, only 7 remain.
        assert_eq!(logger.log_str("VeryLong"), Err(Error::Overflow));
        assert!(logger.has_overflowed());
        assert_eq!(logger.bytes_written(), 3);
    }

    #[test]
    fn test_overflow_flag_sticky() {
        let mut buf = [0u8; 8];
        let mut logger = Logger::new(&mut buf);

        assert_eq!(logger.log_str("too long here"), Err(Error::Overflow));
        assert!(logger.has_overflowed());

        // A later write that fits succeeds but the flag stays up.
        logger.log_str("ok").unwrap();
        assert!(logger.has_overflowed());
    }

    #[test]
    fn test_zero_capacity_buffer() {
        let mut buf = [0u8; 0];
        let mut logger = Logger::new(&mut buf);

        assert_eq!(logger.remaining_capacity(), 0);
        assert_eq!(logger.log_bytes(b"x"), Err(Error::Overflow));
        assert_eq!(logger.log_str(""), Err(Error::Overflow));
        assert!(logger.has_overflowed());
    }

    #[test]
    fn test_empty_bytes_always_fit() {
        let mut buf = [0u8; 0];
        let mut logger = Logger::new(&mut buf);

        logger.log_bytes(&[]).unwrap();
        assert_eq!(logger.bytes_written(), 0);
        assert!(!logger.has_overflowed());
    }

    #[test]
    fn test_reset() {
        let mut buf = [0u8; 100];
        let mut logger = Logger::new(&mut buf);

        logger.log_str("First").unwrap();
        assert_eq!(logger.bytes_written(), 6);

        logger.reset();
        assert_eq!(logger.bytes_written(), 0);
        assert!(!logger.has_overflowed());
        assert_eq!(logger.remaining_capacity(), 100);

        logger.log_str("Second").unwrap();
        assert_eq!(logger.as_slice(), b"Second\0");
    }

    #[test]
    fn test_reset_keeps_format() {
        let mut buf = [0u8; 100];
        let mut logger = Logger::new(&mut buf);

        logger.set_int_format(IntFormat::Octal);
        logger.reset();
        assert_eq!(logger.int_format(), IntFormat::Octal);

        logger.log_int(64u32).unwrap();
        assert_eq!(logger.as_slice(), b"0100\0");
    }

    #[test]
    fn test_push_chaining_mixed() {
        let mut buf = [0u8; 100];
        let mut logger = Logger::new(&mut buf);

        logger
            .push(&[0x01u8, 0x02][..])
            .push("test")
            .push(42u32)
            .push(IntFormat::HexLower)
            .push(255u32);

        assert!(!logger.has_overflowed());
        assert_eq!(logger.as_slice(), b"\x01\x02test\x0042\x000xff\x00");
    }

    #[test]
    fn test_push_overflow_does_not_short_circuit() {
        let mut buf = [0u8; 8];
        let mut logger = Logger::new(&mut buf);

        // First item needs 13 bytes and fails; the next two fit and are
        // still written.
        logger.push("far too long").push("ab").push("cd");

        assert!(logger.has_overflowed());
        assert_eq!(logger.as_slice(), b"ab\0cd\0");
    }

    #[test]
    fn test_push_format_marker_never_fails() {
        let mut buf = [0u8; 0];
        let mut logger = Logger::new(&mut buf);

        logger.push(IntFormat::Octal);
        assert!(!logger.has_overflowed());
        assert_eq!(logger.int_format(), IntFormat::Octal);
    }

    #[test]
    fn test_data_view() {
        let mut buf = [0u8; 16];
        let mut logger = Logger::new(&mut buf);

        logger.log_str("test").unwrap();
        assert_eq!(&logger.data()[..5], b"test\0");
        assert_eq!(logger.data().len(), 16);
    }

    #[test]
    fn test_exact_fit() {
        let mut buf = [0u8; 6];
        let mut logger = Logger::new(&mut buf);

        logger.log_str("Hello").unwrap();
        assert_eq!(logger.remaining_capacity(), 0);
        assert!(!logger.has_overflowed());
    }
}
