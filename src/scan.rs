//! Reading terminator-delimited records back out of a buffer
//!
//! The scanner operates on a borrowed slice, typically the written prefix of
//! a [`Logger`](crate::Logger) buffer, and recovers the records separated by
//! terminator bytes. Binary records are not self-delimiting; callers skip
//! them with [`RecordScanner::skip`] using an out-of-band length.

use crate::error::{Error, Result};
use crate::TERMINATOR;

/// Cursor recovering terminator-delimited records from a buffer
#[derive(Debug)]
pub struct RecordScanner<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> RecordScanner<'a> {
    /// Create a scanner over the given bytes
    ///
    /// Pass the written prefix only (e.g. `logger.as_slice()`); trailing
    /// unwritten buffer bytes would otherwise read as empty records.
    #[inline]
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Bytes not yet consumed
    #[inline]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Whether the scanner has consumed the whole buffer
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.buf.len()
    }

    /// Skip `n` bytes of binary data whose length is known out-of-band
    #[inline]
    pub fn skip(&mut self, n: usize) -> Result<()> {
        if n > self.remaining() {
            return Err(Error::UnexpectedEof);
        }
        self.pos += n;
        Ok(())
    }

    /// Next terminator-delimited record, without its terminator
    ///
    /// Returns `None` when no terminator remains; any unterminated tail
    /// bytes are left unconsumed.
    #[inline]
    pub fn next_record(&mut self) -> Option<&'a [u8]> {
        let rest = &self.buf[self.pos..];
        let end = rest.iter().position(|&b| b == TERMINATOR)?;
        self.pos += end + 1;
        Some(&rest[..end])
    }

    /// Next record as UTF-8 text
    ///
    /// Consumes the record like [`next_record`](Self::next_record); returns
    /// `None` if there is no further record or its bytes are not valid
    /// UTF-8.
    #[inline]
    pub fn next_str(&mut self) -> Option<&'a str> {
        core::str::from_utf8(self.next_record()?).ok()
    }
}
