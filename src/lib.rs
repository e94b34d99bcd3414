pub mod diagnostics;
pub mod dictionary;
pub mod edit_distance;
pub mod error;
pub mod pattern_matcher;
pub mod report;
pub mod sentence_rules;
pub mod suggestion;
pub mod tokenizer;
pub mod word_validator;

// Re-export the three engine entry points
pub use dictionary::{build_dictionary, DictionaryIndex};
pub use sentence_rules::check_sentence_rules;
pub use word_validator::validate_words;

// Re-export main types for convenient access
pub use diagnostics::{Diagnostic, SentenceDiagnostic, UnknownWord, Violation};
pub use error::{EngineError, Result};
pub use pattern_matcher::{Algorithm, Pattern, PatternMatcher};
pub use report::{
    analyze, analyze_document, normalize_line_endings, DocumentReport, DocumentStats, RunStats,
};
pub use sentence_rules::{Sentence, SentenceRuleChecker, SentenceRuleConfig};
pub use suggestion::{suggest, SuggestionEngine, Suggestions};
pub use word_validator::{WordReport, WordValidator};
