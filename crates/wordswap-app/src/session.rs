use std::sync::Arc;

use wordswap_config::Config;
use wordswap_core::{DictionaryController, DictionaryStore, Translator};

use crate::windows::Windows;

/// Everything the event loop works on, owned by that loop alone
pub struct Session {
    pub dictionaries: DictionaryController,
    pub translator: Translator,
    pub windows: Windows,
    pub editor_command: String,
}

impl Session {
    /// Empty dictionary, active path taken from `config`
    pub fn new(config: &Config) -> Self {
        let store = Arc::new(DictionaryStore::new());

        Self {
            dictionaries: DictionaryController::new(store.clone(), config.dictionary.file.clone()),
            translator: Translator::new(store),
            windows: Windows::new(),
            editor_command: config.editor.command.clone(),
        }
    }
}
