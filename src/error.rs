//! Error types for buffer logging

/// Errors that can occur while writing into a log buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Write would exceed remaining buffer capacity
    Overflow,
    /// Integer text did not fit the conversion scratch buffer
    NumericConversion,
    /// Read past the end of the scanned buffer
    UnexpectedEof,
}

impl Error {
    /// Returns a human-readable description of the error
    pub const fn description(&self) -> &'static str {
        match self {
            Error::Overflow => "write exceeds remaining buffer capacity",
            Error::NumericConversion => "integer conversion scratch buffer exhausted",
            Error::UnexpectedEof => "read past the end of the scanned buffer",
        }
    }
}

#[cfg(feature = "std")]
impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Result type alias for logbuf operations
pub type Result<T> = core::result::Result<T, Error>;
