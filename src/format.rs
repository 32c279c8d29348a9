//! Integer-to-ASCII formatting
//!
//! Converts integers of any primitive width to text in one of four bases,
//! writing into a caller-provided scratch buffer with no allocation. Used by
//! [`Logger`](crate::Logger) for formatted integer records.

use crate::error::{Error, Result};

/// Maximum bytes a formatted integer can occupy
///
/// A 64-bit value in octal needs 22 digits; with prefix and sign this bound
/// leaves permanent headroom, so conversion into a scratch buffer of this
/// size cannot fail.
pub const MAX_INT_TEXT: usize = 68;

/// Number format applied to subsequent integer writes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntFormat {
    /// Base 10, no prefix (`255`)
    #[default]
    Decimal,
    /// Base 16, `0x` prefix, lowercase digits (`0xff`)
    HexLower,
    /// Base 16, `0X` prefix, uppercase digits (`0XFF`)
    HexUpper,
    /// Base 8, `0` prefix (`0377`)
    Octal,
}

/// An integer captured for formatting, erased of its source type
///
/// Records both the sign/magnitude view (used for decimal) and the
/// two's-complement bit pattern at the source width (used for hex and
/// octal). Conversions exist from every primitive integer type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntValue {
    magnitude: u64,
    bits: u64,
    negative: bool,
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {$(
        impl From<$t> for IntValue {
            #[inline]
            fn from(value: $t) -> Self {
                IntValue {
                    magnitude: value as u64,
                    bits: value as u64,
                    negative: false,
                }
            }
        }
    )*};
}

macro_rules! impl_from_signed {
    ($($t:ty => $u:ty),*) => {$(
        impl From<$t> for IntValue {
            #[inline]
            fn from(value: $t) -> Self {
                IntValue {
                    magnitude: value.unsigned_abs() as u64,
                    bits: value as $u as u64,
                    negative: value < 0,
                }
            }
        }
    )*};
}

impl_from_unsigned!(u8, u16, u32, u64, usize);
impl_from_signed!(i8 => u8, i16 => u16, i32 => u32, i64 => u64, isize => usize);

/// Format an integer as ASCII text into `out`, no terminator
///
/// Returns the number of bytes written. Negative values render as `-` plus
/// the magnitude in decimal; under hex and octal the two's-complement bit
/// pattern at the value's own width is formatted instead (`-1i8` is `0xff`).
///
/// Errors with [`Error::NumericConversion`] only when `out` is smaller than
/// the produced text, which cannot happen for an `out` of [`MAX_INT_TEXT`]
/// bytes.
#[inline]
pub fn format_int(value: IntValue, format: IntFormat, out: &mut [u8]) -> Result<usize> {
    match format {
        IntFormat::Decimal => format_decimal(value, out),
        IntFormat::HexLower => format_radix(value.bits, 16, b"0x", b"0123456789abcdef", out),
        IntFormat::HexUpper => format_radix(value.bits, 16, b"0X", b"0123456789ABCDEF", out),
        IntFormat::Octal => format_radix(value.bits, 8, b"0", b"01234567", out),
    }
}

fn format_decimal(value: IntValue, out: &mut [u8]) -> Result<usize> {
    // Digits are produced in reverse into a fixed scratch area, then copied
    // to the front. u64::MAX has 20 decimal digits.
    let mut tmp = [0u8; 20];
    let mut pos = tmp.len();
    let mut n = value.magnitude;

    loop {
        pos -= 1;
        tmp[pos] = b'0' + (n % 10) as u8;
        n /= 10;
        if n == 0 {
            break;
        }
    }

    let digits = tmp.len() - pos;
    let total = digits + usize::from(value.negative);
    if total > out.len() {
        return Err(Error::NumericConversion);
    }

    let mut written = 0;
    if value.negative {
        out[0] = b'-';
        written = 1;
    }
    out[written..total].copy_from_slice(&tmp[pos..]);
    Ok(total)
}

fn format_radix(
    bits: u64,
    radix: u64,
    prefix: &[u8],
    digit_table: &[u8],
    out: &mut [u8],
) -> Result<usize> {
    // 64-bit octal is the worst case at 22 digits.
    let mut tmp = [0u8; 22];
    let mut pos = tmp.len();
    let mut n = bits;

    loop {
        pos -= 1;
        tmp[pos] = digit_table[(n % radix) as usize];
        n /= radix;
        if n == 0 {
            break;
        }
    }

    let digits = tmp.len() - pos;
    let total = prefix.len() + digits;
    if total > out.len() {
        return Err(Error::NumericConversion);
    }

    out[..prefix.len()].copy_from_slice(prefix);
    out[prefix.len()..total].copy_from_slice(&tmp[pos..]);
    Ok(total)
}
