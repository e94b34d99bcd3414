// WHY: immutable POS lexicon built once and passed by reference into every pass
// No global state: callers share it across threads behind an Arc if they need to

use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, info};

pub mod loader;

pub use loader::{load_dictionary, parse_dictionary_csv};

/// Mapping from POS tag to the lowercase words carrying that tag
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DictionaryIndex {
    by_tag: BTreeMap<String, BTreeSet<String>>,
    // Union over all tags, kept alongside so membership checks stay O(log n)
    all_words: BTreeSet<String>,
}

impl DictionaryIndex {
    /// Build the index from `(word, tag)` pairs
    ///
    /// Words are trimmed and lowercased, tags are trimmed. Pairs whose word or
    /// tag is blank after trimming are skipped. A word may appear under any
    /// number of tags.
    pub fn from_pairs<I, W, T>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (W, T)>,
        W: AsRef<str>,
        T: AsRef<str>,
    {
        let mut index = Self::default();
        let mut skipped = 0usize;

        for (word, tag) in pairs {
            let word = word.as_ref().trim().to_lowercase();
            let tag = tag.as_ref().trim();
            if word.is_empty() || tag.is_empty() {
                skipped += 1;
                continue;
            }
            index.all_words.insert(word.clone());
            index.by_tag.entry(tag.to_string()).or_default().insert(word);
        }

        if skipped > 0 {
            debug!("Skipped {} blank dictionary pairs", skipped);
        }
        info!(
            tags = index.by_tag.len(),
            words = index.all_words.len(),
            "Built dictionary index"
        );
        index
    }

    /// Case-insensitive membership across every tag
    pub fn contains(&self, word: &str) -> bool {
        self.all_words.contains(word) || self.all_words.contains(&word.to_lowercase())
    }

    /// Case-insensitive membership under one tag
    pub fn has_tag(&self, word: &str, tag: &str) -> bool {
        self.by_tag
            .get(tag)
            .is_some_and(|words| words.contains(&word.to_lowercase()))
    }

    /// Union of the word sets of `tags`; unknown tags contribute nothing
    pub fn union_of<S: AsRef<str>>(&self, tags: &[S]) -> BTreeSet<&str> {
        tags.iter()
            .filter_map(|tag| self.by_tag.get(tag.as_ref()))
            .flat_map(|words| words.iter().map(String::as_str))
            .collect()
    }

    /// Every distinct word across all tags
    pub fn all_words(&self) -> &BTreeSet<String> {
        &self.all_words
    }

    /// `(tag, word)` for every entry, a word listed under several tags appears once per tag
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.by_tag
            .iter()
            .flat_map(|(tag, words)| words.iter().map(move |word| (tag.as_str(), word.as_str())))
    }

    pub fn word_count(&self) -> usize {
        self.all_words.len()
    }

    pub fn tag_count(&self) -> usize {
        self.by_tag.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all_words.is_empty()
    }
}

/// Entry point for external loaders: turn `(word, tag)` pairs into an index
pub fn build_dictionary<I, W, T>(pairs: I) -> DictionaryIndex
where
    I: IntoIterator<Item = (W, T)>,
    W: AsRef<str>,
    T: AsRef<str>,
{
    DictionaryIndex::from_pairs(pairs)
}
