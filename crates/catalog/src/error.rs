//! Catalog Error Types
//!
//! Uses [`exn`] for automatic location tracking and error tree construction,
//! the same way every other crate in the workspace does.

use derive_more::{Display, Error};

/// A catalog error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// These describe what the caller should *do*, not what went wrong internally.
///
/// ### Load Errors
/// - [`ErrorKind::DuplicateCategory`]
///
/// ### Query/Edit Errors
/// - [`ErrorKind::NameConflict`] - pick another name and retry.
/// - [`ErrorKind::UnknownAuthors`] - correct the author list and retry;
///   nothing was deleted.
/// - [`ErrorKind::UnknownCategory`]
/// - [`ErrorKind::EmptyCatalog`]
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The category source lists the same name more than once.
    #[display("duplicate category in source: {_0}")]
    DuplicateCategory(#[error(not(source))] String),
    /// Another category already uses the requested name.
    #[display("a category named '{_0}' already exists")]
    NameConflict(#[error(not(source))] String),
    /// The category id does not belong to this catalog.
    #[display("unknown category")]
    UnknownCategory,
    /// Some requested authors have no books in the catalog.
    #[display("no books found for authors: {} (found: {})", missing.join(", "), found.join(", "))]
    UnknownAuthors {
        /// Requested authors that have at least one book.
        found: Vec<String>,
        /// Requested authors without a single book.
        missing: Vec<String>,
    },
    /// An aggregate was requested over a catalog without books.
    #[display("catalog has no books")]
    EmptyCatalog,
}

impl ErrorKind {
    /// Returns `true` if retrying (with corrected input) might succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::NameConflict(_) | Self::UnknownAuthors { .. })
    }
}
