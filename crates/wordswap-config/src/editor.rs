use std::env;

use serde::{Deserialize, Serialize};

fn default_command() -> String {
    env::var("EDITOR").unwrap_or_else(|_| {
        if cfg!(windows) {
            "notepad".to_string()
        } else {
            "vi".to_string()
        }
    })
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct EditorConfig {
    /// Program and its arguments, split on whitespace; the dictionary path is appended
    #[serde(default = "default_command")]
    pub command: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            command: default_command(),
        }
    }
}
