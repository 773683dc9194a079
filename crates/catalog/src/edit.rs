//! In-place edits of a loaded [`Catalog`].
//!
//! Every edit validates its input completely before touching anything, so a
//! failed edit leaves the catalog exactly as it was.

use crate::catalog::Catalog;
use crate::error::{ErrorKind, Result};
use crate::models::{BookId, CategoryId};
use std::collections::HashSet;
use tracing::instrument;

impl Catalog {
    /// Renames a category.
    ///
    /// Books refer to their category by id, so nothing else needs updating.
    ///
    /// # Errors
    ///
    /// - [`ErrorKind::UnknownCategory`] if `id` is not part of this catalog.
    /// - [`ErrorKind::NameConflict`] if a category (this one included) is
    ///   already called `new_name`.
    #[instrument(skip(self, new_name))]
    pub fn rename_category(&mut self, id: CategoryId, new_name: impl Into<String>) -> Result<()> {
        let new_name = new_name.into();
        if id.0 >= self.categories.len() {
            exn::bail!(ErrorKind::UnknownCategory);
        }
        if self.find_category(&new_name).is_some() {
            exn::bail!(ErrorKind::NameConflict(new_name));
        }
        let category = &mut self.categories[id.0];
        let old_name = std::mem::replace(&mut category.name, new_name.clone());
        self.names.remove(&old_name);
        self.names.insert(new_name.clone(), id);
        tracing::info!(from = %old_name, to = %new_name, "Renamed category");
        Ok(())
    }

    /// Deletes every book written by any of `authors` (exact, case-sensitive
    /// match), from both the master list and the owning categories.
    ///
    /// All or nothing: if any requested author has no books, nothing is
    /// deleted. Repeated names are only counted once.
    ///
    /// Returns the number of distinct authors whose books were deleted.
    ///
    /// # Errors
    ///
    /// [`ErrorKind::UnknownAuthors`], listing which requested authors were
    /// found and which were not.
    #[instrument(skip_all)]
    pub fn delete_books_by_authors<I, S>(&mut self, authors: I) -> Result<usize>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut requested: Vec<String> = Vec::new();
        for author in authors {
            let author = author.as_ref();
            if !requested.iter().any(|r| r == author) {
                requested.push(author.to_string());
            }
        }

        let (found, missing): (Vec<String>, Vec<String>) =
            requested.into_iter().partition(|author| self.books.iter().any(|book| &book.author == author));
        if !missing.is_empty() {
            exn::bail!(ErrorKind::UnknownAuthors { found, missing });
        }

        let doomed: HashSet<&str> = found.iter().map(String::as_str).collect();
        let removed: HashSet<BookId> =
            self.books.iter().filter(|book| doomed.contains(book.author.as_str())).map(|book| book.id).collect();
        self.books.retain(|book| !removed.contains(&book.id));
        for category in &mut self.categories {
            category.books.retain(|id| !removed.contains(id));
        }
        self.reindex();

        tracing::info!(authors = found.len(), books = removed.len(), "Deleted books by author");
        Ok(found.len())
    }
}
