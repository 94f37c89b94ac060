pub mod files;
pub mod operations;

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::constants::{DEFAULT_ATTEMPTS_FILE, DEFAULT_PROGRESS_FILE, DEFAULT_WORDS_FILE};

/// Locations of the three data files. Built once from the config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorePaths {
    pub words: PathBuf,
    pub progress: PathBuf,
    pub attempts: PathBuf,
}

impl StorePaths {
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            words: dir.join(DEFAULT_WORDS_FILE),
            progress: dir.join(DEFAULT_PROGRESS_FILE),
            attempts: dir.join(DEFAULT_ATTEMPTS_FILE),
        }
    }
}

/// Whole-file persistence for the word list, the progress document and the
/// attempt log. The process owns these files exclusively for its lifetime.
#[derive(Debug)]
pub struct Store {
    paths: StorePaths,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("validation error: {0}")]
    Validation(String),
}

impl Store {
    /// Opens the store, creating the data directory and any missing file in
    /// its empty state. A first run is not an error.
    pub fn open(paths: StorePaths) -> Result<Self, StoreError> {
        let store = Self { paths };
        for path in [&store.paths.words, &store.paths.progress, &store.paths.attempts] {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
        }
        if !store.paths.words.exists() {
            store.write_words_header()?;
            tracing::info!(path = %store.paths.words.display(), "Created word list");
        }
        if !store.paths.attempts.exists() {
            store.write_attempts_header()?;
            tracing::info!(path = %store.paths.attempts.display(), "Created attempt log");
        }
        if !store.paths.progress.exists() {
            fs::write(&store.paths.progress, files::EMPTY_PROGRESS)?;
            tracing::info!(path = %store.paths.progress.display(), "Created progress document");
        }
        tracing::info!(paths = ?store.paths, "Store opened");
        Ok(store)
    }

    pub fn paths(&self) -> &StorePaths {
        &self.paths
    }

    /// Truncates all three files back to their empty states.
    pub fn reset(&self) -> Result<(), StoreError> {
        self.write_words_header()?;
        self.write_attempts_header()?;
        fs::write(&self.paths.progress, files::EMPTY_PROGRESS)?;
        tracing::warn!("Store reset");
        Ok(())
    }

    fn write_words_header(&self) -> Result<(), StoreError> {
        let mut writer = Self::csv_writer(&self.paths.words)?;
        writer.write_record(files::WORDS_HEADER)?;
        writer.flush()?;
        Ok(())
    }

    fn write_attempts_header(&self) -> Result<(), StoreError> {
        let mut writer = Self::csv_writer(&self.paths.attempts)?;
        writer.write_record(files::ATTEMPTS_HEADER)?;
        writer.flush()?;
        Ok(())
    }

    pub(crate) fn csv_reader(path: &Path) -> Result<csv::Reader<fs::File>, StoreError> {
        Ok(csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_path(path)?)
    }

    /// Truncating writer; headers are written explicitly so an empty table
    /// still carries one.
    pub(crate) fn csv_writer(path: &Path) -> Result<csv::Writer<fs::File>, StoreError> {
        Ok(csv::WriterBuilder::new()
            .has_headers(false)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_path(path)?)
    }

    pub(crate) fn csv_appender(path: &Path) -> Result<csv::Writer<fs::File>, StoreError> {
        let file = fs::OpenOptions::new().create(true).append(true).open(path)?;
        Ok(csv::WriterBuilder::new()
            .has_headers(false)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(file))
    }
}
