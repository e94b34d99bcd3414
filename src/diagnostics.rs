// WHY: Structured diagnostics first, strings only at the presentation edge
// Both diagnostic families serialize with a `kind` tag so JSON consumers can filter them

use serde::Serialize;
use std::fmt;

/// Sentence rule that was violated
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum Violation {
    /// First letter after optional whitespace and quote is not uppercase
    Capitalization,
    /// Two or more consecutive whitespace characters
    MultipleSpaces,
    /// Trimmed sentence does not end in a terminal mark
    MissingTerminalPunctuation,
    /// `.` directly followed by a letter, or `,` directly followed by a non-space non-quote
    PunctuationSpacing { fragment: String },
    /// No dictionary noun and/or no dictionary verb in the sentence
    MissingPartOfSpeech { noun: bool, verb: bool },
}

impl Violation {
    pub fn name(&self) -> &'static str {
        match self {
            Violation::Capitalization => "capitalization",
            Violation::MultipleSpaces => "multiple_spaces",
            Violation::MissingTerminalPunctuation => "missing_terminal_punctuation",
            Violation::PunctuationSpacing { .. } => "punctuation_spacing",
            Violation::MissingPartOfSpeech { .. } => "missing_part_of_speech",
        }
    }
}

/// One rule violation inside one sentence
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SentenceDiagnostic {
    pub sentence_index: usize,
    pub line: usize,
    pub sentence: String,
    #[serde(flatten)]
    pub violation: Violation,
}

impl fmt::Display for SentenceDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sentence = &self.sentence;
        match &self.violation {
            Violation::Capitalization => write!(f, "Capitalization error at: {sentence}"),
            Violation::MultipleSpaces => write!(f, "Multiple spaces: {sentence}"),
            Violation::MissingTerminalPunctuation => write!(f, "No ending mark at: {sentence}"),
            Violation::PunctuationSpacing { fragment } => {
                write!(f, "Punctuation spacing error at: '{fragment}' in '{sentence}'")
            }
            Violation::MissingPartOfSpeech { noun, verb } => {
                let missing = match (noun, verb) {
                    (true, true) => "a noun and a verb",
                    (true, false) => "a noun",
                    (false, true) => "a verb",
                    (false, false) => "nothing",
                };
                write!(f, "Sentence '{sentence}' lacks {missing}.")
            }
        }
    }
}

/// A word missing from the dictionary with its nearest replacements
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnknownWord {
    pub word: String,
    pub suggestions: Vec<String>,
    pub min_distance: Option<usize>,
}

impl fmt::Display for UnknownWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.word, self.suggestions.join(", "))
    }
}

/// Either diagnostic family, merged only for presentation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    UnknownWord(UnknownWord),
    SentenceRule(SentenceDiagnostic),
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnknownWord(word) => write!(f, "Unknown word {word}"),
            Diagnostic::SentenceRule(rule) => rule.fmt(f),
        }
    }
}
