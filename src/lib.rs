//! logbuf: zero-allocation logging into caller-provided byte buffers
//!
//! This crate provides a lightweight, allocation-free writer that serializes
//! raw bytes, strings and formatted integers sequentially into a fixed-size
//! buffer owned by the caller.
//!
//! # Buffer Layout
//!
//! ```text
//! +--------------+----+--------------+----+------------------+
//! | "Name:" text | 00 | "Alice" text | 00 | raw binary bytes |
//! +--------------+----+--------------+----+------------------+
//! ```
//!
//! Every text or integer record is followed by exactly one zero terminator
//! byte, so a reader scanning for terminators can recover record boundaries.
//! Raw binary writes carry no terminator and must be delimited out-of-band.
//!
//! # Features
//!
//! - Allocation-free writing into user-provided buffers
//! - All-or-nothing writes: a rejected write never leaves partial bytes
//! - Sticky overflow flag for batch-style error inspection
//! - Decimal, hex (lower/upper) and octal integer formatting
//! - Fluent chaining with in-line number format switching
//! - `no_std` support
//!
//! # Example
//!
//! ```rust
//! use logbuf::{IntFormat, Logger};
//!
//! let mut buf = [0u8; 64];
//! let mut logger = Logger::new(&mut buf);
//!
//! logger.log_str("User: ")?;
//! logger.log_str("alice")?;
//! logger.set_int_format(IntFormat::HexLower);
//! logger.log_int(255u32)?;
//!
//! // "User: \0" + "alice\0" + "0xff\0"
//! assert_eq!(logger.bytes_written(), 7 + 6 + 5);
//! assert!(!logger.has_overflowed());
//! # Ok::<(), logbuf::Error>(())
//! ```

#![no_std]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[cfg(feature = "std")]
extern crate std;

pub mod error;
pub mod format;
pub mod logger;
pub mod scan;

// Re-export main types
pub use error::Error;
pub use format::{IntFormat, IntValue, MAX_INT_TEXT};
pub use logger::{Item, Logger};
pub use scan::RecordScanner;

/// Terminator byte appended after every text or formatted-integer record
pub const TERMINATOR: u8 = 0;
