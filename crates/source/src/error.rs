//! Source Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.

use derive_more::{Display, Error};
use std::path::PathBuf;

/// A source error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for source operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// These describe what the caller should *do*, not what went wrong internally.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// A source file could not be opened.
    #[display("cannot open source: {}", _0.display())]
    Open(#[error(not(source))] PathBuf),
    /// Reading rows from an opened source failed (I/O).
    #[display("failed to read source rows")]
    Read,
    /// A row is missing a field, a field could not be parsed, or the row is
    /// not valid UTF-8.
    #[display("malformed row on line {row}: field '{field}', found value: {value:?}")]
    MalformedRow {
        /// Line of the source the row starts on (1-based, header included).
        row: u64,
        /// The field that failed to parse.
        field: &'static str,
        /// The raw value found, empty if the field was missing.
        value: String,
    },
    /// A cover path is empty, absolute, or escapes the covers directory.
    #[display("invalid cover path: {}", _0.display())]
    InvalidPath(#[error(not(source))] PathBuf),
    /// The rows were read, but the catalog could not be built from them.
    #[display("catalog could not be built from sources")]
    Catalog,
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Open(_) | Self::Read)
    }
}
