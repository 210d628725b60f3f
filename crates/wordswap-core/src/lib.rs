pub mod dictionary;
pub mod error;
pub mod lifecycle;
pub mod tokenizer;
pub mod translator;
pub mod window;

pub use dictionary::{Dictionary, DictionaryStore};
pub use error::{Result, WordswapError};
pub use lifecycle::DictionaryController;
pub use tokenizer::{Token, Tokens, tokenize};
pub use translator::{FileOutcome, Translation, Translator};
pub use window::{AuxiliaryWindow, CloseSignal, SlotState, WindowSlot};
