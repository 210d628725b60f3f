use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use arc_swap::ArcSwap;

/// Case-insensitive word to replacement mapping.
///
/// Keys that differ only in ASCII case collapse into one entry. Once published
/// through a [`DictionaryStore`] a dictionary is never mutated.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Dictionary {
    entries: HashMap<String, String>,
}

fn fold_key(key: &str) -> Cow<'_, str> {
    if key.bytes().any(|b| b.is_ascii_uppercase()) {
        Cow::Owned(key.to_ascii_lowercase())
    } else {
        Cow::Borrowed(key)
    }
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a flat JSON object whose values are all strings
    pub fn from_json(data: &[u8]) -> Result<Self, serde_json::Error> {
        // Sorted so that the byte-wise smallest spelling of a key wins a case collision
        let raw: BTreeMap<String, String> = serde_json::from_slice(data)?;
        Ok(raw.into_iter().collect())
    }

    pub fn get(&self, word: &str) -> Option<&str> {
        self.entries.get(fold_key(word).as_ref()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Dictionary
where
    K: AsRef<str>,
    V: Into<String>,
{
    /// The first spelling of a key is kept, later case variants are ignored
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut entries = HashMap::new();
        for (key, value) in iter {
            entries
                .entry(fold_key(key.as_ref()).into_owned())
                .or_insert_with(|| value.into());
        }
        Self { entries }
    }
}

/// Holder of the active dictionary.
///
/// Replacement swaps a pointer, so readers always see one whole dictionary.
#[derive(Debug, Default)]
pub struct DictionaryStore {
    current: ArcSwap<Dictionary>,
}

impl DictionaryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dictionary(dictionary: Dictionary) -> Self {
        Self {
            current: ArcSwap::from_pointee(dictionary),
        }
    }

    pub fn set(&self, dictionary: Dictionary) {
        tracing::debug!("Publishing dictionary with {} entries", dictionary.len());
        self.current.store(Arc::new(dictionary));
    }

    pub fn lookup(&self, word: &str) -> Option<String> {
        self.current.load().get(word).map(str::to_owned)
    }

    /// The dictionary published at the time of the call
    pub fn snapshot(&self) -> Arc<Dictionary> {
        self.current.load_full()
    }
}
