use super::{CategoryId, Cover};
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Identifier of a [`Book`] within its [`Catalog`](crate::Catalog).
///
/// Ids are handed out in load order and never reused, so they stay valid
/// (and keep pointing at the same book) after other books are deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BookId(pub(crate) usize);

/// A single book in the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    pub(crate) id: BookId,
    pub(crate) title: String,
    pub(crate) author: String,
    pub(crate) rating: f64,
    pub(crate) category: CategoryId,
    pub(crate) cover: Option<Cover>,
}
impl Book {
    pub(crate) fn new(id: BookId, title: String, author: String, rating: f64, category: CategoryId) -> Self {
        Self { id, title, author, rating, category, cover: None }
    }

    pub fn id(&self) -> BookId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn rating(&self) -> f64 {
        self.rating
    }

    /// The category this book was filed under at load time.
    pub fn category(&self) -> CategoryId {
        self.category
    }

    pub fn cover(&self) -> Option<&Cover> {
        self.cover.as_ref()
    }

    pub fn has_cover(&self) -> bool {
        self.cover.is_some()
    }

    /// Case-insensitive substring match against the author's name.
    ///
    /// `needle` must already be lowercase.
    pub(crate) fn author_contains(&self, needle: &str) -> bool {
        self.author.to_lowercase().contains(needle)
    }
}

impl Display for Book {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{} by {} ({:.1})", self.title, self.author, self.rating)
    }
}
