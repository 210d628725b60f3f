use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::editor::EditorConfig;

pub mod dictionary;
pub mod editor;


fn default_delta_time() -> u64 {
    env::var("DELTA_TIME_MS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(100) // 100ms default
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    #[serde(flatten)]
    pub dictionary: DictionaryConfig,
    pub editor: EditorConfig,

    /// App main loop delta time
    #[serde(default = "default_delta_time")]
    pub delta_time: u64,
}

impl Config {
    pub fn new() -> Self {
        Self {
            dictionary: DictionaryConfig::default(),
            editor: EditorConfig::default(),
            delta_time: default_delta_time(),
        }
    }

    /// Read the config at `path`, falling back to defaults when it does not exist
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let data = match fs::read_to_string(path) {
            Ok(data) => data,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::new()),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        serde_json::from_str(&data).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let data = serde_json::to_string_pretty(self).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, data).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("Failed to write config {path}: {source}")]
    Write { path: PathBuf, source: io::Error },

    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}
