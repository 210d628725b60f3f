use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use wordswap_types::DisplayTranslation;

use crate::dictionary::{Dictionary, DictionaryStore};
use crate::error::{Result, WordswapError};
use crate::tokenizer::{Token, tokenize};

/// Rewritten sentence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub text: String,
}

impl Translation {
    /// Character count of the rewritten text
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Value for the result counter: one less than the length, ignoring the trailing separator
    pub fn counter(&self) -> usize {
        self.len().saturating_sub(1)
    }
}

impl From<Translation> for DisplayTranslation {
    fn from(translation: Translation) -> Self {
        let length = translation.len();
        let counter = translation.counter();
        DisplayTranslation {
            text: translation.text,
            length,
            counter,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    Completed { lines: usize },
    Cancelled { lines: usize },
}

pub struct Translator {
    store: Arc<DictionaryStore>,
}

impl Translator {
    pub fn new(store: Arc<DictionaryStore>) -> Self {
        Self { store }
    }

    pub fn translate_sentence(&self, text: &str) -> Translation {
        translate_with(&self.store.snapshot(), text)
    }

    /// Translate `source` line by line into `dest`, truncating it first.
    ///
    /// The whole file is translated with the dictionary active when the call
    /// starts. On error the lines written so far stay in `dest`.
    pub fn translate_file(&self, source: &Path, dest: &Path) -> Result<usize> {
        match self.translate_file_until(source, dest, &CancellationToken::new())? {
            FileOutcome::Completed { lines } | FileOutcome::Cancelled { lines } => Ok(lines),
        }
    }

    /// Same as [`Translator::translate_file`] but checks `cancel` between lines
    pub fn translate_file_until(
        &self,
        source: &Path,
        dest: &Path,
        cancel: &CancellationToken,
    ) -> Result<FileOutcome> {
        let input = File::open(source).map_err(|e| WordswapError::read(source, e))?;
        let output = File::create(dest).map_err(|e| WordswapError::write(dest, e))?;

        let dictionary = self.store.snapshot();
        let mut writer = BufWriter::new(output);
        let mut lines = 0;

        tracing::info!("Translating {} -> {}", source.display(), dest.display());
        let mut reader = BufReader::new(input);
        let mut buf = Vec::new();
        loop {
            if cancel.is_cancelled() {
                tracing::warn!("File translation cancelled after {} lines", lines);
                writer.flush().map_err(|e| WordswapError::write(dest, e))?;
                return Ok(FileOutcome::Cancelled { lines });
            }

            buf.clear();
            let read = reader
                .read_until(b'\n', &mut buf)
                .map_err(|e| WordswapError::read(source, e))?;
            if read == 0 {
                break;
            }

            // Undecodable bytes become U+FFFD, which the tokenizer drops like punctuation
            let line = String::from_utf8_lossy(strip_line_ending(&buf));
            let translated = translate_with(&dictionary, &line);
            writeln!(writer, "{}", translated.text).map_err(|e| WordswapError::write(dest, e))?;
            lines += 1;
        }

        writer.flush().map_err(|e| WordswapError::write(dest, e))?;
        tracing::info!("Translated {} lines into {}", lines, dest.display());
        Ok(FileOutcome::Completed { lines })
    }
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

fn translate_with(dictionary: &Dictionary, text: &str) -> Translation {
    let mut result = String::with_capacity(text.len());

    for token in tokenize(text) {
        let piece = match token {
            Token::Word(word) => dictionary.get(word).unwrap_or(word),
            other => other.as_str(),
        };
        result.push_str(piece);
        // Every piece gets a separator, line controls included
        result.push(' ');
    }

    Translation { text: result }
}
