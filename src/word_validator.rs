// WHY: unknown-word detection with nearest-word corrections for each miss
// Keeps original casing and document order; duplicates are reported every time they occur

use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, info};

use crate::dictionary::DictionaryIndex;
use crate::error::Result;
use crate::suggestion::{SuggestionEngine, Suggestions};
use crate::tokenizer::WordTokenizer;

/// Outcome of one word-validation pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WordReport {
    /// Tokens missing from the dictionary, in document order
    pub unknown: Vec<String>,
    /// Corrections keyed by the token as written
    pub suggestions: BTreeMap<String, Suggestions>,
}

impl WordReport {
    pub fn is_clean(&self) -> bool {
        self.unknown.is_empty()
    }
}

pub struct WordValidator {
    tokenizer: WordTokenizer,
    engine: SuggestionEngine,
}

impl WordValidator {
    pub fn new() -> Result<Self> {
        Self::with_engine(SuggestionEngine::default())
    }

    pub fn with_engine(engine: SuggestionEngine) -> Result<Self> {
        Ok(Self {
            tokenizer: WordTokenizer::new()?,
            engine,
        })
    }

    /// Classify every token of `document` as known or unknown
    pub fn validate(&self, document: &str, dictionary: &DictionaryIndex) -> WordReport {
        let mut report = WordReport::default();
        // Same lowercase form always yields the same suggestions
        let mut computed: BTreeMap<String, Suggestions> = BTreeMap::new();
        let mut token_count = 0usize;

        for token in self.tokenizer.tokens(document) {
            token_count += 1;
            let lowered = token.to_lowercase();
            if dictionary.contains(&lowered) || self.tokenizer.is_numeric(token) {
                continue;
            }

            report.unknown.push(token.to_string());
            if report.suggestions.contains_key(token) {
                continue;
            }

            let suggestions = computed
                .entry(lowered)
                .or_insert_with_key(|key| self.engine.suggest(key, dictionary))
                .clone();
            debug!(
                word = token,
                candidates = suggestions.candidates.len(),
                "Unknown word"
            );
            report.suggestions.insert(token.to_string(), suggestions);
        }

        info!(
            tokens = token_count,
            unknown = report.unknown.len(),
            "Word validation complete"
        );
        report
    }
}

/// Entry point: unknown words of `document` and their corrections
pub fn validate_words(document: &str, dictionary: &DictionaryIndex) -> Result<WordReport> {
    Ok(WordValidator::new()?.validate(document, dictionary))
}
