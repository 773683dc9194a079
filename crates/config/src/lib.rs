//! Configuration for locating the catalog sources.
//!
//! Layers, lowest priority first:
//!
//! 1. Built-in defaults (see [`Config::default`]),
//! 2. `config.toml` in the platform configuration directory, if present,
//! 3. an explicit configuration file (`.toml`, `.yaml`/`.yml` or `.json`),
//! 4. `SHELF_`-prefixed environment variables (e.g. `SHELF_DATA_DIR`).

pub mod error;

use crate::error::{ErrorKind, Result};
use directories::ProjectDirs;
use exn::ResultExt;
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::instrument;

/// Prefix for environment variable overrides.
pub const ENV_PREFIX: &str = "SHELF_";

/// Where the catalog sources live.
///
/// File names are resolved against [`data_dir`](Config::data_dir) unless they
/// are absolute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding the sources
    pub data_dir: PathBuf,
    /// Category source (CSV)
    pub categories: PathBuf,
    /// Book source (CSV)
    pub books: PathBuf,
    /// Directory cover paths are relative to; defaults to `data_dir`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub covers: Option<PathBuf>,
}
impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            categories: PathBuf::from("categories.csv"),
            books: PathBuf::from("books.csv"),
            covers: None,
        }
    }
}

impl Config {
    pub fn categories_path(&self) -> PathBuf {
        self.data_dir.join(&self.categories)
    }

    pub fn books_path(&self) -> PathBuf {
        self.data_dir.join(&self.books)
    }

    pub fn covers_path(&self) -> PathBuf {
        match &self.covers {
            Some(covers) => self.data_dir.join(covers),
            None => self.data_dir.clone(),
        }
    }

    /// Loads the configuration from every layer.
    #[instrument]
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        Self::figment(explicit)?.extract().or_raise(|| ErrorKind::Extract)
    }

    /// The merged [`Figment`] behind [`Config::load`], for callers that want
    /// to add their own layers on top.
    pub fn figment(explicit: Option<&Path>) -> Result<Figment> {
        let user = ProjectDirs::from("", "", "shelf").map(|dirs| dirs.config_dir().join("config.toml"));
        layered(user.as_deref(), explicit)
    }
}

fn layered(user: Option<&Path>, explicit: Option<&Path>) -> Result<Figment> {
    let mut figment = Figment::from(Serialized::defaults(Config::default()));
    if let Some(user) = user.filter(|path| path.is_file()) {
        tracing::debug!(path = %user.display(), "Merging user configuration file");
        figment = figment.merge(Toml::file_exact(user));
    }
    if let Some(path) = explicit {
        if !path.is_file() {
            exn::bail!(ErrorKind::NotFound(path.to_path_buf()));
        }
        figment = match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => figment.merge(Toml::file_exact(path)),
            Some("yaml" | "yml") => figment.merge(Yaml::file_exact(path)),
            Some("json") => figment.merge(Json::file_exact(path)),
            _ => exn::bail!(ErrorKind::UnsupportedFormat(path.to_path_buf())),
        };
    }
    Ok(figment.merge(Env::prefixed(ENV_PREFIX)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;
    use rstest::rstest;
    use std::fs;
    use tempfile::TempDir;

    fn extract(user: Option<&Path>, explicit: Option<&Path>) -> Result<Config> {
        layered(user, explicit)?.extract().or_raise(|| ErrorKind::Extract)
    }

    #[rstest]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.categories_path(), Path::new("data/categories.csv"));
        assert_eq!(config.books_path(), Path::new("data/books.csv"));
        assert_eq!(config.covers_path(), Path::new("data"));
    }

    #[rstest]
    #[case("shelf.toml", "data_dir = \"/srv/libreria\"\nbooks = \"libros.csv\"\ncovers = \"imagenes\"\n")]
    #[case("shelf.yaml", "data_dir: /srv/libreria\nbooks: libros.csv\ncovers: imagenes\n")]
    #[case("shelf.json", r#"{"data_dir": "/srv/libreria", "books": "libros.csv", "covers": "imagenes"}"#)]
    fn test_explicit_file(#[case] name: &str, #[case] contents: &str) {
        Jail::expect_with(|jail| {
            jail.clear_env();
            jail.create_file(name, contents)?;

            let config = extract(None, Some(Path::new(name))).unwrap();
            assert_eq!(config.books_path(), Path::new("/srv/libreria/libros.csv"));
            assert_eq!(config.categories_path(), Path::new("/srv/libreria/categories.csv"));
            assert_eq!(config.covers_path(), Path::new("/srv/libreria/imagenes"));
            Ok(())
        });
    }

    #[rstest]
    fn test_explicit_file_overrides_user_file() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            jail.create_file("config.toml", "data_dir = \"/usuario\"\ncategories = \"cats.csv\"\n")?;
            jail.create_file("shelf.toml", "data_dir = \"/explicito\"\n")?;

            let config = extract(Some(Path::new("config.toml")), Some(Path::new("shelf.toml"))).unwrap();
            assert_eq!(config.categories_path(), Path::new("/explicito/cats.csv"));
            Ok(())
        });
    }

    #[rstest]
    fn test_missing_explicit_file() {
        let err = extract(None, Some(Path::new("/no/such/shelf.toml"))).unwrap_err();
        assert_eq!(&*err, &ErrorKind::NotFound(PathBuf::from("/no/such/shelf.toml")));
    }

    #[rstest]
    fn test_unsupported_format() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("shelf.ini");
        fs::write(&path, "data_dir=/x").unwrap();
        let err = extract(None, Some(&path)).unwrap_err();
        assert_eq!(&*err, &ErrorKind::UnsupportedFormat(path));
    }

    #[rstest]
    fn test_invalid_value() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            jail.create_file("shelf.toml", "data_dir = [1, 2]\n")?;
            let err = extract(None, Some(Path::new("shelf.toml"))).unwrap_err();
            assert_eq!(&*err, &ErrorKind::Extract);
            Ok(())
        });
    }

    #[rstest]
    fn test_environment_overrides() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            jail.create_file("shelf.toml", "data_dir = \"/archivo\"\n")?;
            jail.set_env("SHELF_DATA_DIR", "/entorno");
            jail.set_env("SHELF_COVERS", "portadas");

            let config = extract(None, Some(Path::new("shelf.toml"))).unwrap();
            assert_eq!(config.books_path(), Path::new("/entorno/books.csv"));
            assert_eq!(config.covers_path(), Path::new("/entorno/portadas"));
            Ok(())
        });
    }
}
