use super::BookId;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Identifier of a [`Category`] within its [`Catalog`](crate::Catalog).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CategoryId(pub(crate) usize);

/// A named group of books.
///
/// The book collection only ever holds ids of books whose
/// [`category`](super::Book::category) points back here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub(crate) id: CategoryId,
    pub(crate) name: String,
    pub(crate) is_fiction: bool,
    pub(crate) books: Vec<BookId>,
}
impl Category {
    pub(crate) fn new(id: CategoryId, name: String, is_fiction: bool) -> Self {
        Self { id, name, is_fiction, books: Vec::new() }
    }

    pub fn id(&self) -> CategoryId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_fiction(&self) -> bool {
        self.is_fiction
    }

    /// Ids of the books in this category, in load order.
    pub fn book_ids(&self) -> &[BookId] {
        &self.books
    }

    /// Number of books filed under this category.
    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self.is_fiction {
            true => write!(f, "{} (fiction)", self.name),
            false => write!(f, "{}", self.name),
        }
    }
}
