//! CSV readers for the category and book sources.
//!
//! Both sources start with a header row, which is skipped. Fields are
//! trimmed. Rows may not be short a column: a missing field is reported the
//! same way as one that fails to parse.

use crate::error::{ErrorKind, Result};
use csv::{ErrorKind as CsvErrorKind, ReaderBuilder, StringRecord, Trim};
use exn::{OptionExt, ResultExt};
use shelf_catalog::{BookRow, CategoryRow};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;
use tracing::instrument;

/// A record along with the line it started on, for error reporting.
struct Record {
    inner: StringRecord,
    line: u64,
}
impl Record {
    fn malformed(&self, field: &'static str, value: impl Into<String>) -> ErrorKind {
        ErrorKind::MalformedRow { row: self.line, field, value: value.into() }
    }

    fn text(&self, index: usize, field: &'static str) -> Result<&str> {
        self.inner.get(index).ok_or_raise(|| self.malformed(field, ""))
    }

    fn parse<T>(&self, index: usize, field: &'static str) -> Result<T>
    where
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        let value = self.text(index, field)?;
        value.parse::<T>().or_raise(|| self.malformed(field, value))
    }

    fn flag(&self, index: usize, field: &'static str) -> Result<bool> {
        let value = self.text(index, field)?;
        match value.to_ascii_lowercase().as_str() {
            "true" => Ok(true),
            "false" => Ok(false),
            _ => exn::bail!(self.malformed(field, value)),
        }
    }
}

/// Column names of each source, in order, for error reporting.
const CATEGORY_FIELDS: &[&str] = &["name", "is_fiction"];
const BOOK_FIELDS: &[&str] = &["title", "author", "rating", "category", "cover", "width", "height"];

fn records<R: Read>(source: R, fields: &'static [&'static str]) -> impl Iterator<Item = Result<Record>> {
    let reader = ReaderBuilder::new().has_headers(true).trim(Trim::All).flexible(true).from_reader(source);
    reader.into_records().map(move |record| -> Result<Record> {
        let inner = match record {
            Ok(inner) => inner,
            Err(e) => {
                // Undecodable bytes are a problem with the row, not with reading.
                let malformed = match e.kind() {
                    CsvErrorKind::Utf8 { pos, err } => Some(ErrorKind::MalformedRow {
                        row: pos.as_ref().map(|p| p.line()).unwrap_or_default(),
                        field: fields.get(err.field()).copied().unwrap_or("unknown"),
                        value: "invalid UTF-8".to_string(),
                    }),
                    _ => None,
                };
                let kind = malformed.unwrap_or(ErrorKind::Read);
                return Err(e).or_raise(|| kind.clone());
            },
        };
        let line = inner.position().map(|p| p.line()).unwrap_or_default();
        Ok(Record { inner, line })
    })
}

fn open(path: &Path) -> Result<File> {
    File::open(path).or_raise(|| ErrorKind::Open(path.to_path_buf()))
}

/// Reads `name,is_fiction` rows.
#[instrument(skip(source), fields(rows))]
pub fn read_categories<R: Read>(source: R) -> Result<Vec<CategoryRow>> {
    let mut rows = Vec::new();
    for record in records(source, CATEGORY_FIELDS) {
        let record = record?;
        rows.push(CategoryRow { name: record.text(0, "name")?.to_string(), is_fiction: record.flag(1, "is_fiction")? });
    }
    tracing::Span::current().record("rows", rows.len());
    Ok(rows)
}

/// Reads `title,author,rating,category,cover,width,height` rows.
#[instrument(skip(source), fields(rows))]
pub fn read_books<R: Read>(source: R) -> Result<Vec<BookRow>> {
    let mut rows = Vec::new();
    for record in records(source, BOOK_FIELDS) {
        let record = record?;
        let rating: f64 = record.parse(2, "rating")?;
        if !rating.is_finite() {
            exn::bail!(record.malformed("rating", rating.to_string()));
        }
        rows.push(BookRow {
            title: record.text(0, "title")?.to_string(),
            author: record.text(1, "author")?.to_string(),
            rating,
            category: record.text(3, "category")?.to_string(),
            cover_path: record.text(4, "cover")?.to_string(),
            width: record.parse(5, "width")?,
            height: record.parse(6, "height")?,
        });
    }
    tracing::Span::current().record("rows", rows.len());
    Ok(rows)
}

/// Opens and reads a category CSV file.
pub fn read_categories_file(path: impl AsRef<Path>) -> Result<Vec<CategoryRow>> {
    read_categories(open(path.as_ref())?)
}

/// Opens and reads a book CSV file.
pub fn read_books_file(path: impl AsRef<Path>) -> Result<Vec<BookRow>> {
    read_books(open(path.as_ref())?)
}
