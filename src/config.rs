//! Configuration and on-disk locations. Everything lives beneath a single
//! folder in the user's home so installing a translation is just dropping a
//! `.SQLite3` file into `books/`.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::BaseDirs;
use serde::Deserialize;

/// Folder name used beneath the user's home directory for application data.
const DATA_DIR_NAME: &str = ".bible-projector";
/// Sub-folder holding the installed translation databases.
const BOOKS_DIR_NAME: &str = "books";
/// Optional settings file inside the data directory.
const CONFIG_FILE_NAME: &str = "config.toml";
/// Sub-folder receiving the log file.
const LOG_DIR_NAME: &str = "logs";

/// Settings read from `config.toml`. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Where translation databases are looked up. Relative paths are resolved
    /// against the data directory.
    pub books_dir: Option<PathBuf>,
    /// Translation opened at start-up when installed.
    pub default_translation: Option<String>,
    /// `tracing` filter directive, for example `bible_projector=debug`.
    pub log_filter: Option<String>,
}

impl Config {
    pub fn parse(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("failed to parse configuration")
    }

    /// Read a config file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(contents) => Self::parse(&contents)
                .with_context(|| format!("invalid configuration in {}", path.display())),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(err).with_context(|| format!("failed to read {}", path.display())),
        }
    }

    /// Books directory after applying the data-directory default.
    pub fn resolve_books_dir(&self, data_dir: &Path) -> PathBuf {
        match &self.books_dir {
            Some(dir) if dir.is_absolute() => dir.clone(),
            Some(dir) => data_dir.join(dir),
            None => data_dir.join(BOOKS_DIR_NAME),
        }
    }
}

/// Resolve the absolute path to the data directory inside the user's home.
pub fn data_dir() -> Result<PathBuf> {
    let base_dirs = BaseDirs::new().ok_or_else(|| anyhow!("could not locate home directory"))?;
    Ok(base_dirs.home_dir().join(DATA_DIR_NAME))
}

pub fn default_config_path(data_dir: &Path) -> PathBuf {
    data_dir.join(CONFIG_FILE_NAME)
}

pub fn log_dir(data_dir: &Path) -> PathBuf {
    data_dir.join(LOG_DIR_NAME)
}
