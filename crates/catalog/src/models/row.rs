//! Typed rows produced by whatever reads the two catalog sources.

/// One row of the category source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRow {
    pub name: String,
    pub is_fiction: bool,
}
impl CategoryRow {
    pub fn new(name: impl Into<String>, is_fiction: bool) -> Self {
        Self { name: name.into(), is_fiction }
    }
}

/// One row of the book source.
#[derive(Debug, Clone, PartialEq)]
pub struct BookRow {
    pub title: String,
    pub author: String,
    pub rating: f64,
    /// Name of the category; resolved (or created) during load.
    pub category: String,
    /// Cover image path, only attached if it exists.
    pub cover_path: String,
    pub width: u32,
    pub height: u32,
}
impl BookRow {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        rating: f64,
        category: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            rating,
            category: category.into(),
            cover_path: String::new(),
            width: 0,
            height: 0,
        }
    }

    /// Builder-style helper for attaching cover metadata to the row.
    pub fn with_cover(mut self, path: impl Into<String>, width: u32, height: u32) -> Self {
        self.cover_path = path.into();
        self.width = width;
        self.height = height;
        self
    }
}
