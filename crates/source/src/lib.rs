//! Reads the catalog sources from disk and builds a [`Catalog`] from them.
//!
//! The category and book sources are CSV files (see [`read_categories`] and
//! [`read_books`]); covers are looked up in a directory
//! ([`CoverDirectory`]). [`open`] wires all three together from a
//! [`Config`].

mod cover;
pub mod error;
mod path;
mod read;

pub use crate::cover::CoverDirectory;
pub use crate::path::resolve as resolve_cover;
pub use crate::read::{read_books, read_books_file, read_categories, read_categories_file};

use crate::error::{ErrorKind, Result};
use exn::ResultExt;
use shelf_catalog::{Catalog, LoadReport};
use shelf_config::Config;
use tracing::instrument;

/// Loads the catalog described by `config`.
///
/// Both sources are read completely before the catalog is built, and any
/// failure aborts the whole load.
#[instrument(skip_all, fields(data_dir = %config.data_dir.display()))]
pub fn open(config: &Config) -> Result<(Catalog, LoadReport)> {
    let categories = read_categories_file(config.categories_path())?;
    let books = read_books_file(config.books_path())?;
    let covers = CoverDirectory::new(config.covers_path());
    let (catalog, report) = Catalog::load(categories, books, &covers).or_raise(|| ErrorKind::Catalog)?;
    if !report.is_clean() {
        tracing::info!(created = ?report.created(), "Books referenced categories missing from the category source");
    }
    Ok((catalog, report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    const CATEGORIES: &str = "Nombre,Ficcion\nAventura,true\nCiencia,false\n";

    const BOOKS: &str = concat!(
        "Titulo,Autor,Calificacion,Categoria,Portada,Ancho,Alto\n",
        "Viaje al centro de la Tierra,Julio Verne,4.0,Aventura,imagenes/verne.jpg,200,300\n",
        "Cosmos,Carl Sagan,5.0,Ciencia,imagenes/cosmos.jpg,180,240\n",
        "El sabueso de los Baskerville,Arthur Conan Doyle,3.0,Misterio,imagenes/sabueso.jpg,200,300\n",
        "Estudio en escarlata,Arthur Conan Doyle,4.0,Misterio,,0,0\n",
    );

    fn write(dir: &Path, name: &str, contents: &str) {
        let path = dir.join(name);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    #[fixture]
    fn library() -> (TempDir, Config) {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "categorias.csv", CATEGORIES);
        write(dir.path(), "libros.csv", BOOKS);
        write(dir.path(), "imagenes/verne.jpg", "jpeg");
        write(dir.path(), "imagenes/sabueso.jpg", "jpeg");
        let config = Config {
            data_dir: dir.path().to_path_buf(),
            categories: "categorias.csv".into(),
            books: "libros.csv".into(),
            covers: None,
        };
        (dir, config)
    }

    #[rstest]
    fn test_open(library: (TempDir, Config)) {
        let (_dir, config) = library;
        let (catalog, report) = open(&config).unwrap();

        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.categories().count(), 3);
        assert_eq!(report.created(), ["Misterio".to_string()]);
        assert_eq!(report.books_in_created("Misterio"), Some(2));
        assert!(!catalog.find_category("Misterio").unwrap().is_fiction());
        assert_eq!(catalog.count_books_without_cover(), 2);
        assert!(catalog.find_book("Viaje al centro de la Tierra").unwrap().has_cover());
        assert!(!catalog.find_book("Cosmos").unwrap().has_cover());
        assert_eq!(catalog.average_rating().unwrap(), 4.0);
        assert_eq!(catalog.category_with_most_books().unwrap().name(), "Misterio");
        assert_eq!(catalog.category_with_best_average_rating().unwrap().name(), "Ciencia");
        assert!(!catalog.has_author_across_categories());
    }

    #[rstest]
    fn test_open_missing_source(library: (TempDir, Config)) {
        let (_dir, mut config) = library;
        config.books = "no-existe.csv".into();
        let err = open(&config).unwrap_err();
        assert_eq!(&*err, &ErrorKind::Open(config.books_path()));
    }

    #[rstest]
    fn test_open_malformed_source(library: (TempDir, Config)) {
        let (dir, config) = library;
        write(dir.path(), "libros.csv", "Titulo,Autor,Calificacion,Categoria,Portada,Ancho,Alto\nA,B,x,C,,0,0\n");
        let err = open(&config).unwrap_err();
        assert!(matches!(&*err, ErrorKind::MalformedRow { row: 2, field: "rating", .. }));
    }

    #[rstest]
    fn test_open_duplicate_category(library: (TempDir, Config)) {
        let (dir, config) = library;
        write(dir.path(), "categorias.csv", "Nombre,Ficcion\nAventura,true\nAventura,false\n");
        let err = open(&config).unwrap_err();
        assert_eq!(&*err, &ErrorKind::Catalog);
    }
}
