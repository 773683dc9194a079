//! Building a [`Catalog`] from the category and book sources.

use crate::Catalog;
use crate::error::{ErrorKind, Result};
use crate::models::{BookRow, CategoryId, CategoryRow, Cover};
use std::collections::HashMap;
use tracing::instrument;

/// Decides whether a cover image referenced by a book row is available.
///
/// Implemented for any `Fn(&str) -> bool`, so tests can pass a closure.
pub trait CoverCheck {
    fn exists(&self, path: &str) -> bool;
}
impl<F: Fn(&str) -> bool> CoverCheck for F {
    fn exists(&self, path: &str) -> bool {
        self(path)
    }
}

/// Bookkeeping produced while loading a catalog.
///
/// Lists the categories that had to be created because a book referenced a
/// name the category source did not contain, and how many books each of them
/// ended up holding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    created: Vec<String>,
    counts: HashMap<String, usize>,
}
impl LoadReport {
    /// Names of the auto-created categories, in order of first appearance.
    pub fn created(&self) -> &[String] {
        &self.created
    }

    /// Number of books filed under an auto-created category once loading
    /// finished. `None` if `name` was not auto-created.
    pub fn books_in_created(&self, name: &str) -> Option<usize> {
        self.counts.get(name).copied()
    }

    pub fn counts(&self) -> &HashMap<String, usize> {
        &self.counts
    }

    /// `true` when every book referenced a known category.
    pub fn is_clean(&self) -> bool {
        self.created.is_empty()
    }
}

impl Catalog {
    /// Builds a catalog from the rows of both sources.
    ///
    /// Categories are registered in row order. Each book is then filed under
    /// the category it names; unknown names get a new non-fiction category,
    /// which later rows naming it will reuse. A cover is attached when
    /// `covers` reports that its path exists.
    ///
    /// # Errors
    ///
    /// [`ErrorKind::DuplicateCategory`] if two category rows share a name.
    /// Nothing is returned on failure.
    #[instrument(skip_all, fields(categories, books, created))]
    pub fn load<C, B>(categories: C, books: B, covers: &impl CoverCheck) -> Result<(Self, LoadReport)>
    where
        C: IntoIterator<Item = CategoryRow>,
        B: IntoIterator<Item = BookRow>,
    {
        let mut catalog = Self::new();
        for CategoryRow { name, is_fiction } in categories {
            if catalog.names.contains_key(&name) {
                exn::bail!(ErrorKind::DuplicateCategory(name));
            }
            catalog.push_category(name, is_fiction);
        }

        let mut created: Vec<CategoryId> = Vec::new();
        for row in books {
            let BookRow { title, author, rating, category, cover_path, width, height } = row;
            let category = match catalog.names.get(&category) {
                Some(&id) => id,
                None => {
                    tracing::info!(category = %category, title = %title, "Book references unknown category; creating it");
                    let id = catalog.push_category(category, false);
                    created.push(id);
                    id
                },
            };
            let cover = match covers.exists(&cover_path) {
                true => Some(Cover::new(cover_path, width, height)),
                false => {
                    tracing::debug!(title = %title, cover = %cover_path, "Cover image not found; book has no cover");
                    None
                },
            };
            catalog.push_book(category, title, author, rating, cover);
        }

        // Counts are taken from the final tallies, not per row.
        let mut report = LoadReport::default();
        for id in created {
            let category = &catalog.categories[id.0];
            report.counts.insert(category.name.clone(), category.len());
            report.created.push(category.name.clone());
        }

        let span = tracing::Span::current();
        span.record("categories", catalog.categories.len());
        span.record("books", catalog.books.len());
        span.record("created", report.created.len());
        Ok((catalog, report))
    }
}
