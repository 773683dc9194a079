//! Lookups, searches and aggregates over a loaded [`Catalog`].

use crate::catalog::{Catalog, CategoryRef};
use crate::error::{ErrorKind, Result};
use crate::models::{Book, CategoryId};
use std::collections::{HashMap, HashSet};

impl Catalog {
    /// The category named exactly `name`.
    pub fn find_category(&self, name: &str) -> Option<CategoryRef<'_>> {
        self.names.get(name).and_then(|&id| self.category(id))
    }

    /// Books of the category named `name`; empty if there is no such category.
    pub fn books_in_category(&self, name: &str) -> Vec<&Book> {
        self.find_category(name).map(|category| category.books().collect()).unwrap_or_default()
    }

    /// First book in load order whose title is exactly `title`.
    pub fn find_book(&self, title: &str) -> Option<&Book> {
        self.books.iter().find(|book| book.title == title)
    }

    /// Books whose author contains `needle`, ignoring case.
    ///
    /// Matching is on substrings, not words: `"ulio v"` finds books by
    /// `"Julio Verne"`. Results are grouped by category, in category order.
    pub fn find_books_by_author(&self, needle: &str) -> Vec<&Book> {
        let needle = needle.to_lowercase();
        self.categories().flat_map(|category| category.books()).filter(|book| book.author_contains(&needle)).collect()
    }

    /// Categories holding at least one book written by exactly `author`.
    pub fn find_categories_by_author(&self, author: &str) -> Vec<CategoryRef<'_>> {
        self.categories().filter(|category| category.has_author(author)).collect()
    }

    /// Mean rating across every book in the catalog.
    ///
    /// # Errors
    ///
    /// [`ErrorKind::EmptyCatalog`] when there are no books to average.
    pub fn average_rating(&self) -> Result<f64> {
        if self.books.is_empty() {
            exn::bail!(ErrorKind::EmptyCatalog);
        }
        Ok(self.books.iter().map(Book::rating).sum::<f64>() / self.books.len() as f64)
    }

    /// The category holding the most books. Ties go to the category loaded
    /// first; `None` only when there are no categories at all.
    pub fn category_with_most_books(&self) -> Option<CategoryRef<'_>> {
        let mut best: Option<CategoryRef<'_>> = None;
        for category in self.categories() {
            if best.is_none_or(|b| category.len() > b.len()) {
                best = Some(category);
            }
        }
        best
    }

    /// The category whose books have the highest mean rating.
    ///
    /// Empty categories count as negative infinity, so they only win when
    /// every category is empty (and then the first one does).
    pub fn category_with_best_average_rating(&self) -> Option<CategoryRef<'_>> {
        let mut best: Option<(f64, CategoryRef<'_>)> = None;
        for category in self.categories() {
            let mean = category.average_rating().unwrap_or(f64::NEG_INFINITY);
            if best.is_none_or(|(b, _)| mean > b) {
                best = Some((mean, category));
            }
        }
        best.map(|(_, category)| category)
    }

    pub fn count_books_without_cover(&self) -> usize {
        self.books.iter().filter(|book| !book.has_cover()).count()
    }

    /// Whether any author has books in two or more different categories.
    pub fn has_author_across_categories(&self) -> bool {
        let mut seen: HashMap<&str, HashSet<CategoryId>> = HashMap::new();
        for book in &self.books {
            let categories = seen.entry(book.author.as_str()).or_default();
            if categories.insert(book.category) && categories.len() > 1 {
                return true;
            }
        }
        false
    }
}
