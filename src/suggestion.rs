// WHY: nearest-word search over the whole lexicon, keeping every word tied at the minimum
// Pruning only skips candidates already known to be worse, so ties survive unchanged

use serde::Serialize;
use std::collections::BTreeSet;

use crate::dictionary::DictionaryIndex;
use crate::edit_distance;

/// Dictionary words at minimum edit distance from a queried word
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Suggestions {
    pub candidates: BTreeSet<String>,
    /// `None` only when the dictionary is empty
    pub min_distance: Option<usize>,
}

impl Suggestions {
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    fn offer(&mut self, candidate: &str, dist: usize) {
        match self.min_distance {
            Some(best) if dist > best => {}
            Some(best) if dist == best => {
                self.candidates.insert(candidate.to_string());
            }
            _ => {
                self.candidates.clear();
                self.candidates.insert(candidate.to_string());
                self.min_distance = Some(dist);
            }
        }
    }
}

/// Configurable front end for [`suggest`]
#[derive(Debug, Clone, Copy)]
pub struct SuggestionEngine {
    /// Stop each comparison once it exceeds the best distance seen so far
    pub prune: bool,
}

impl Default for SuggestionEngine {
    fn default() -> Self {
        Self { prune: true }
    }
}

impl SuggestionEngine {
    pub fn new(prune: bool) -> Self {
        Self { prune }
    }

    /// Scan every word under every tag and keep all words tying for the minimum distance
    pub fn suggest(&self, word: &str, dictionary: &DictionaryIndex) -> Suggestions {
        let query = word.to_lowercase();
        let mut result = Suggestions::default();

        for (_, candidate) in dictionary.entries() {
            let dist = match (self.prune, result.min_distance) {
                (true, Some(best)) => match edit_distance::distance_within(&query, candidate, best) {
                    Some(dist) => dist,
                    None => continue,
                },
                _ => edit_distance::distance(&query, candidate),
            };
            result.offer(candidate, dist);
        }

        result
    }
}

/// Nearest dictionary words to `word`, ties kept
pub fn suggest(word: &str, dictionary: &DictionaryIndex) -> Suggestions {
    SuggestionEngine::default().suggest(word, dictionary)
}
