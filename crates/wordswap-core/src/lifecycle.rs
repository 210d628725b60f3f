use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::dictionary::{Dictionary, DictionaryStore};
use crate::error::{Result, WordswapError};

/// Read and parse the dictionary document at `path`
pub fn read_dictionary(path: &Path) -> Result<Dictionary> {
    let data = fs::read(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => WordswapError::DictionaryNotFound {
            path: path.to_path_buf(),
        },
        _ => WordswapError::read(path, source),
    })?;

    Dictionary::from_json(&data).map_err(|source| WordswapError::DictionaryParseError {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads dictionaries into the store and tracks which file is active
pub struct DictionaryController {
    store: Arc<DictionaryStore>,
    active_path: PathBuf,
}

impl DictionaryController {
    /// `active_path` is the configured dictionary, loaded or not
    pub fn new(store: Arc<DictionaryStore>, active_path: impl Into<PathBuf>) -> Self {
        Self {
            store,
            active_path: active_path.into(),
        }
    }

    /// Replace the active dictionary with the one at `path`.
    ///
    /// On error neither the store nor the active path change.
    pub fn load_from(&mut self, path: &Path) -> Result<()> {
        tracing::info!("Loading dictionary from: {}", path.display());
        let dictionary = read_dictionary(path).inspect_err(|e| {
            tracing::warn!("Keeping previous dictionary: {}", e);
        })?;

        tracing::info!("Loaded {} dictionary entries", dictionary.len());
        self.store.set(dictionary);
        self.active_path = path.to_path_buf();
        Ok(())
    }

    /// Load the active path again, e.g. after it was edited
    pub fn reload(&mut self) -> Result<()> {
        let path = self.active_path.clone();
        self.load_from(&path)
    }

    pub fn active_path(&self) -> &Path {
        &self.active_path
    }

    pub fn store(&self) -> &Arc<DictionaryStore> {
        &self.store
    }
}
