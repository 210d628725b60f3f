use std::io;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, WordswapError>;

#[derive(Debug, thiserror::Error)]
pub enum WordswapError {
    #[error("Dictionary not found: {}", path.display())]
    DictionaryNotFound { path: PathBuf },

    #[error("Invalid dictionary {}: {source}", path.display())]
    DictionaryParseError {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to read {}: {source}", path.display())]
    FileReadError { path: PathBuf, source: io::Error },

    #[error("Failed to write {}: {source}", path.display())]
    FileWriteError { path: PathBuf, source: io::Error },
}

impl WordswapError {
    pub(crate) fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::FileReadError {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::FileWriteError {
            path: path.into(),
            source,
        }
    }
}
