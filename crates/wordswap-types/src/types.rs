use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub enum AppEvent {
    Translate(String),
    TranslateFile {
        source: PathBuf,
        dest: PathBuf,
    },
    /// Switch to a dictionary that is already listed
    LoadDictionary(PathBuf),
    /// Dictionary picked by the user, remembered on success
    OpenNewDictionary(PathBuf),
    OpenEditor,
    OpenInfo,
    CloseWindow(WindowKind),
    QueryActivePath,
    Shutdown,

    ShowTranslation(DisplayTranslation),
    FileTranslated {
        dest: PathBuf,
    },
    DictionaryAdded(PathBuf),
    DictionaryLoaded(PathBuf),
    ActivePath(PathBuf),
    ShowInfo(String),
    WindowClosed(WindowKind),
    Error(String),
}

/// Translated sentence as presented to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayTranslation {
    pub text: String,
    /// Character count of `text`
    pub length: usize,
    /// Value shown in the result counter
    pub counter: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowKind {
    Editor,
    Info,
}

impl fmt::Display for WindowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WindowKind::Editor => f.write_str("editor"),
            WindowKind::Info => f.write_str("info"),
        }
    }
}
