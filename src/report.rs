// WHY: Presentation and timing around the two independent passes
// Neither pass sees the other's output; they are merged here only for display

use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::time::Instant;

use crate::diagnostics::{Diagnostic, SentenceDiagnostic, UnknownWord};
use crate::dictionary::DictionaryIndex;
use crate::error::Result;
use crate::sentence_rules::SentenceRuleChecker;
use crate::word_validator::{WordReport, WordValidator};

/// Both passes over one document plus how long they took
#[derive(Debug, Clone, Serialize)]
pub struct DocumentReport {
    pub document: String,
    pub words: WordReport,
    pub sentence_errors: Vec<SentenceDiagnostic>,
    pub elapsed_ms: u64,
}

impl DocumentReport {
    /// Unknown words first (one per distinct spelling), then sentence diagnostics
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        let unknown = self.words.suggestions.iter().map(|(word, suggestions)| {
            Diagnostic::UnknownWord(UnknownWord {
                word: word.clone(),
                suggestions: suggestions.candidates.iter().cloned().collect(),
                min_distance: suggestions.min_distance,
            })
        });
        let rules = self.sentence_errors.iter().cloned().map(Diagnostic::SentenceRule);
        unknown.chain(rules).collect()
    }

    pub fn is_clean(&self) -> bool {
        self.words.is_clean() && self.sentence_errors.is_empty()
    }

    /// Plain-text rendering for terminals
    pub fn render_text(&self) -> String {
        let mut out = String::new();

        let quoted: Vec<String> = self.words.unknown.iter().map(|w| format!("'{w}'")).collect();
        let _ = writeln!(out, "Words not found: [{}]", quoted.join(", "));
        let _ = writeln!(out);

        let _ = writeln!(out, "Suggestions:");
        for (word, suggestions) in &self.words.suggestions {
            let candidates: Vec<&str> = suggestions.candidates.iter().map(String::as_str).collect();
            let _ = writeln!(out, "{word}: {}", candidates.join(", "));
        }
        let _ = writeln!(out);

        let _ = writeln!(out, "Sentence errors:");
        if self.sentence_errors.is_empty() {
            let _ = writeln!(out, "No Sentences Error");
        } else {
            for (number, error) in self.sentence_errors.iter().enumerate() {
                let _ = writeln!(out, "{}. {}", number + 1, error);
            }
        }
        let _ = writeln!(out);

        let _ = writeln!(out, "Execution time: {:.2} seconds", self.elapsed_ms as f64 / 1000.0);
        out
    }
}

/// Per-document timing record written to the stats file
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DocumentStats {
    pub path: String,
    pub chars_processed: u64,
    pub unknown_words: u64,
    pub sentence_errors: u64,
    pub processing_time_ms: u64,
    /// Processing status (success, failed)
    pub status: String,
    pub error: Option<String>,
}

impl DocumentStats {
    pub fn success(report: &DocumentReport, chars_processed: usize) -> Self {
        Self {
            path: report.document.clone(),
            chars_processed: chars_processed as u64,
            unknown_words: report.words.unknown.len() as u64,
            sentence_errors: report.sentence_errors.len() as u64,
            processing_time_ms: report.elapsed_ms,
            status: "success".to_string(),
            error: None,
        }
    }

    pub fn failure(path: &str, error: &anyhow::Error) -> Self {
        Self {
            path: path.to_string(),
            chars_processed: 0,
            unknown_words: 0,
            sentence_errors: 0,
            processing_time_ms: 0,
            status: "failed".to_string(),
            error: Some(format!("{error:#}")),
        }
    }
}

/// Aggregate statistics for one CLI run
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct RunStats {
    pub algorithm: String,
    pub dictionary_words: u64,
    pub dictionary_tags: u64,
    pub total_processing_time_ms: u64,
    pub documents: Vec<DocumentStats>,
}

impl RunStats {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Fold `\r\n` and lone `\r` into `\n` so line-based rules never see a carriage return
pub fn normalize_line_endings(text: &str) -> String {
    if !text.contains('\r') {
        return text.to_string();
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Run word validation and sentence rules over one document and time them together
pub fn analyze_document(
    name: &str,
    document: &str,
    dictionary: &DictionaryIndex,
    validator: &WordValidator,
    checker: &SentenceRuleChecker,
) -> DocumentReport {
    let start = Instant::now();
    let words = validator.validate(document, dictionary);
    let sentence_errors = checker.check(document, dictionary);
    DocumentReport {
        document: name.to_string(),
        words,
        sentence_errors,
        elapsed_ms: start.elapsed().as_millis() as u64,
    }
}

/// Convenience wrapper building default validator and checker
pub fn analyze(
    name: &str,
    document: &str,
    dictionary: &DictionaryIndex,
    checker: &SentenceRuleChecker,
) -> Result<DocumentReport> {
    let validator = WordValidator::new()?;
    Ok(analyze_document(name, document, dictionary, &validator, checker))
}
