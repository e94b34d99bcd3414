// WHY: Per-sentence formatting rules plus the noun/verb presence check
// Every rule runs independently, so one sentence can collect several diagnostics

use regex_automata::meta::Regex;
use std::collections::BTreeSet;
use tracing::{debug, info};

use crate::diagnostics::{SentenceDiagnostic, Violation};
use crate::dictionary::DictionaryIndex;
use crate::error::Result;
use crate::pattern_matcher::{Algorithm, Pattern};
use crate::tokenizer::WordTokenizer;

pub mod abbreviations;
pub mod splitter;

pub use abbreviations::AbbreviationGuard;
pub use splitter::{split_sentences, Sentence};

/// Tags whose words count as nouns
pub const NOUN_TAGS: &[&str] = &["NN", "NNS", "NNP", "NNPS", "PRP", "PRP$"];

/// Tags whose words count as verbs
///
/// `NNS` is listed here as well as in [`NOUN_TAGS`]; see
/// [`SentenceRuleConfig::strict_verb_tags`] for the set without it.
pub const VERB_TAGS: &[&str] = &["VB", "VBG", "VBD", "VBN", "VBP", "VBZ", "NNS"];

const MULTIPLE_SPACES_PATTERN: &str = r"\s{2,}";
const PERIOD_SPACING_PATTERN: &str = r"\.[A-Za-z]";
const COMMA_SPACING_PATTERN: &str = r#",[^ \n"]"#;

/// Configuration for sentence splitting and rule checks
#[derive(Debug, Clone)]
pub struct SentenceRuleConfig {
    /// Marks that end a sentence when followed by whitespace
    pub terminal_punctuation: Vec<char>,
    /// A single leading quote skipped by the capitalization rule
    pub opening_quotes: Vec<char>,
    /// Abbreviations masked during splitting
    pub abbreviations: AbbreviationGuard,
    pub noun_tags: Vec<String>,
    pub verb_tags: Vec<String>,
}

impl Default for SentenceRuleConfig {
    fn default() -> Self {
        Self {
            terminal_punctuation: vec!['.', '?', '!'],
            opening_quotes: vec!['"', '\u{201C}'],
            abbreviations: AbbreviationGuard::default(),
            noun_tags: NOUN_TAGS.iter().map(|t| t.to_string()).collect(),
            verb_tags: VERB_TAGS.iter().map(|t| t.to_string()).collect(),
        }
    }
}

impl SentenceRuleConfig {
    /// Default configuration with the plural-noun tag removed from the verb tags
    pub fn strict_verb_tags() -> Self {
        let mut config = Self::default();
        config.verb_tags.retain(|tag| tag != "NNS");
        config
    }
}

/// Sentence splitter and rule engine bound to one search algorithm
pub struct SentenceRuleChecker {
    config: SentenceRuleConfig,
    algorithm: Algorithm,
    tokenizer: WordTokenizer,
    multiple_spaces: Regex,
    period_spacing: Regex,
    comma_spacing: Regex,
}

impl SentenceRuleChecker {
    pub fn new(config: SentenceRuleConfig, algorithm: Algorithm) -> Result<Self> {
        Ok(Self {
            config,
            algorithm,
            tokenizer: WordTokenizer::new()?,
            multiple_spaces: Regex::new(MULTIPLE_SPACES_PATTERN)?,
            period_spacing: Regex::new(PERIOD_SPACING_PATTERN)?,
            comma_spacing: Regex::new(COMMA_SPACING_PATTERN)?,
        })
    }

    pub fn with_default_rules(algorithm: Algorithm) -> Result<Self> {
        Self::new(SentenceRuleConfig::default(), algorithm)
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn config(&self) -> &SentenceRuleConfig {
        &self.config
    }

    /// Split `document` into sentences with abbreviations protected
    pub fn split(&self, document: &str) -> Vec<Sentence> {
        let guard = &self.config.abbreviations;
        let protected = guard.protect(document);

        let sentences: Vec<Sentence> = split_sentences(&protected, &self.config.terminal_punctuation)
            .into_iter()
            .enumerate()
            .map(|(index, raw)| Sentence {
                index,
                line: raw.line,
                text: guard.restore(raw.text),
            })
            .collect();

        debug!("Split document into {} sentences", sentences.len());
        sentences
    }

    /// Run every rule on every sentence of `document`
    pub fn check(&self, document: &str, dictionary: &DictionaryIndex) -> Vec<SentenceDiagnostic> {
        let nouns = dictionary.union_of(&self.config.noun_tags);
        let verbs = dictionary.union_of(&self.config.verb_tags);
        debug!(nouns = nouns.len(), verbs = verbs.len(), "Resolved part-of-speech sets");

        // One compiled needle per dictionary word, shared by every sentence
        let noun_patterns = self.compile_words(&nouns);
        let verb_patterns = self.compile_words(&verbs);

        let sentences = self.split(document);
        let mut diagnostics = Vec::new();
        for sentence in &sentences {
            self.check_sentence(sentence, &noun_patterns, &verb_patterns, &mut diagnostics);
        }

        info!(
            algorithm = %self.algorithm,
            sentences = sentences.len(),
            diagnostics = diagnostics.len(),
            "Sentence rule check complete"
        );
        diagnostics
    }

    fn check_sentence(
        &self,
        sentence: &Sentence,
        nouns: &[Pattern<'_, &str>],
        verbs: &[Pattern<'_, &str>],
        out: &mut Vec<SentenceDiagnostic>,
    ) {
        let text = sentence.text.as_str();
        let mut report = |violation: Violation| {
            out.push(SentenceDiagnostic {
                sentence_index: sentence.index,
                line: sentence.line,
                sentence: sentence.text.clone(),
                violation,
            });
        };

        if !self.starts_with_capital(text) {
            report(Violation::Capitalization);
        }

        if self.multiple_spaces.is_match(text) {
            report(Violation::MultipleSpaces);
        }

        let ends_with_terminal = text
            .trim()
            .chars()
            .last()
            .is_some_and(|c| self.config.terminal_punctuation.contains(&c));
        if !ends_with_terminal {
            report(Violation::MissingTerminalPunctuation);
        }

        // Period errors first, then comma errors, each in order of occurrence
        for regex in [&self.period_spacing, &self.comma_spacing] {
            for m in regex.find_iter(text) {
                report(Violation::PunctuationSpacing {
                    fragment: text[m.range()].to_string(),
                });
            }
        }

        let tokens = self.tokenizer.lowercase_tokens(text);
        let haystack: Vec<&str> = tokens.iter().map(String::as_str).collect();
        let noun_missing = !any_present(&haystack, nouns);
        let verb_missing = !any_present(&haystack, verbs);
        if noun_missing || verb_missing {
            report(Violation::MissingPartOfSpeech {
                noun: noun_missing,
                verb: verb_missing,
            });
        }
    }

    /// First letter after trimming, one optional opening quote and one optional
    /// whitespace character must be uppercase
    fn starts_with_capital(&self, text: &str) -> bool {
        let mut chars = text.trim().chars().peekable();
        if chars.peek().is_some_and(|c| self.config.opening_quotes.contains(c)) {
            chars.next();
        }
        if chars.peek().is_some_and(|c| c.is_whitespace()) {
            chars.next();
        }
        chars.next().is_some_and(char::is_uppercase)
    }

    fn compile_words<'w>(&self, words: &'w BTreeSet<&str>) -> Vec<Pattern<'w, &'w str>> {
        words
            .iter()
            .map(|word| Pattern::compile(self.algorithm, std::slice::from_ref(word)))
            .collect()
    }
}

/// True if any compiled candidate word occurs among the sentence tokens
fn any_present(haystack: &[&str], candidates: &[Pattern<'_, &str>]) -> bool {
    candidates.iter().any(|pattern| pattern.is_found_in(haystack))
}

/// Entry point: rule diagnostics for `document`, rendered as strings
///
/// `algorithm` must name a supported search algorithm ("KMP" or "BoyerMoore");
/// anything else fails with [`EngineError::UnsupportedAlgorithm`](crate::error::EngineError::UnsupportedAlgorithm).
pub fn check_sentence_rules(document: &str, dictionary: &DictionaryIndex, algorithm: &str) -> Result<Vec<String>> {
    let algorithm: Algorithm = algorithm.parse()?;
    let checker = SentenceRuleChecker::with_default_rules(algorithm)?;
    Ok(checker
        .check(document, dictionary)
        .iter()
        .map(ToString::to_string)
        .collect())
}
