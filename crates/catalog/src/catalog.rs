//! The [`Catalog`] aggregate and borrowed views into it.

use crate::models::{Book, BookId, Category, CategoryId, Cover};
use std::collections::HashMap;
use std::ops::Deref;

/// Owns every [`Category`] and every [`Book`].
///
/// Categories keep the order they were loaded in (that order decides ties in
/// the ranking queries), and are also indexed by name. Books are kept in a
/// master list in load order.
///
/// # Invariants
///
/// - Every book's category is present in the catalog, and that category's
///   book collection contains the book exactly once.
/// - No two categories share a name.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub(crate) categories: Vec<Category>,
    pub(crate) names: HashMap<String, CategoryId>,
    pub(crate) books: Vec<Book>,
    /// Position of each book in the master list.
    pub(crate) positions: HashMap<BookId, usize>,
    pub(crate) next_book: usize,
}
impl Catalog {
    /// An empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// All categories, in load order.
    pub fn categories(&self) -> impl Iterator<Item = CategoryRef<'_>> {
        self.categories.iter().map(|category| CategoryRef { catalog: self, category })
    }

    /// The master list of books, in load order.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn book(&self, id: BookId) -> Option<&Book> {
        self.positions.get(&id).map(|&position| &self.books[position])
    }

    pub fn category(&self, id: CategoryId) -> Option<CategoryRef<'_>> {
        self.categories.get(id.0).map(|category| CategoryRef { catalog: self, category })
    }

    /// Number of books in the catalog.
    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub(crate) fn push_category(&mut self, name: String, is_fiction: bool) -> CategoryId {
        let id = CategoryId(self.categories.len());
        self.names.insert(name.clone(), id);
        self.categories.push(Category::new(id, name, is_fiction));
        id
    }

    /// Files a new book under `category`, adding it to the master list and to
    /// the category in one step.
    pub(crate) fn push_book(
        &mut self,
        category: CategoryId,
        title: String,
        author: String,
        rating: f64,
        cover: Option<Cover>,
    ) -> BookId {
        let id = BookId(self.next_book);
        self.next_book += 1;
        let mut book = Book::new(id, title, author, rating, category);
        book.cover = cover;
        self.categories[category.0].books.push(id);
        self.positions.insert(id, self.books.len());
        self.books.push(book);
        id
    }

    /// Rebuilds the book position index after the master list changed shape.
    pub(crate) fn reindex(&mut self) {
        self.positions = self.books.iter().enumerate().map(|(position, book)| (book.id, position)).collect();
    }
}

/// A [`Category`] borrowed together with the [`Catalog`] that owns its books.
///
/// Dereferences to [`Category`], and adds the queries that need to look at
/// the books themselves.
#[derive(Debug, Clone, Copy)]
pub struct CategoryRef<'a> {
    catalog: &'a Catalog,
    category: &'a Category,
}
impl<'a> CategoryRef<'a> {
    /// Books in this category, in load order.
    pub fn books(&self) -> impl Iterator<Item = &'a Book> + use<'a> {
        let catalog = self.catalog;
        self.category.books.iter().filter_map(move |id| catalog.book(*id))
    }

    /// Whether `book` is filed under this category.
    pub fn is_member(&self, book: &Book) -> bool {
        book.category == self.category.id && self.category.books.contains(&book.id)
    }

    /// Mean rating of the books in this category, or `None` if it has none.
    pub fn average_rating(&self) -> Option<f64> {
        match self.category.books.len() {
            0 => None,
            count => Some(self.books().map(Book::rating).sum::<f64>() / count as f64),
        }
    }

    /// Books whose author contains `needle`, ignoring case.
    pub fn books_by_author(&self, needle: &str) -> Vec<&'a Book> {
        let needle = needle.to_lowercase();
        self.books().filter(|book| book.author_contains(&needle)).collect()
    }

    /// Whether at least one book in this category was written by exactly `author`.
    pub fn has_author(&self, author: &str) -> bool {
        self.books().any(|book| book.author == author)
    }
}
impl Deref for CategoryRef<'_> {
    type Target = Category;
    fn deref(&self) -> &Self::Target {
        self.category
    }
}
