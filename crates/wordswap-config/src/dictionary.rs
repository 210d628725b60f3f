use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

fn default_file() -> PathBuf {
    PathBuf::from("basic.json")
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Dictionary loaded at startup and opened by the editor
    #[serde(default = "default_file")]
    pub file: PathBuf,
    /// Every dictionary the user has opened, oldest first
    #[serde(default)]
    pub dictionaries: Vec<PathBuf>,
}

impl DictionaryConfig {
    /// Returns `true` when `path` was not listed before.
    pub fn remember(&mut self, path: &Path) -> bool {
        if self.dictionaries.iter().any(|known| known == path) {
            return false;
        }
        self.dictionaries.push(path.to_path_buf());
        true
    }
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            file: default_file(),
            dictionaries: vec![],
        }
    }
}
