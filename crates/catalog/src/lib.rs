//! In-memory book catalog.
//!
//! Books are filed under categories. A [`Catalog`] is built once from the
//! rows of two sources (see [`Catalog::load`]) and then queried and edited
//! synchronously. Reading the sources themselves is left to the caller.

mod catalog;
mod edit;
pub mod error;
mod load;
pub mod models;
mod query;

pub use crate::catalog::{Catalog, CategoryRef};
pub use crate::load::{CoverCheck, LoadReport};
pub use crate::models::{Book, BookId, BookRow, Category, CategoryId, CategoryRow, Cover};
