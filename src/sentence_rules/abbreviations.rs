// WHY: Reversible abbreviation masking so title periods never look like sentence ends
// Each abbreviation is swapped for a placeholder before splitting and swapped back afterwards

/// Title abbreviations that precede proper nouns, e.g. "Dr. Smith", "Mr. Johnson"
pub const TITLE_ABBREVIATIONS: &[&str] = &["Dr.", "Mr.", "Mrs.", "Ms.", "Prof.", "Sr.", "Jr."];

/// Stand-in for a masked period; a private-use character that ordinary text does not contain
pub const PERIOD_PLACEHOLDER: char = '\u{E000}';

/// Default placeholder for an abbreviation: every period replaced by [`PERIOD_PLACEHOLDER`]
pub fn default_placeholder(abbreviation: &str) -> String {
    abbreviation.replace('.', &PERIOD_PLACEHOLDER.to_string())
}

/// Abbreviation-to-placeholder table applied around sentence splitting
#[derive(Debug, Clone)]
pub struct AbbreviationGuard {
    /// (abbreviation, placeholder), longest abbreviation first
    entries: Vec<(String, String)>,
}

impl AbbreviationGuard {
    /// Build a guard from explicit (abbreviation, placeholder) pairs
    pub fn new<I, A, P>(entries: I) -> Self
    where
        I: IntoIterator<Item = (A, P)>,
        A: Into<String>,
        P: Into<String>,
    {
        let mut entries: Vec<(String, String)> = entries
            .into_iter()
            .map(|(abbr, placeholder)| (abbr.into(), placeholder.into()))
            .filter(|(abbr, placeholder)| !abbr.is_empty() && abbr != placeholder)
            .collect();
        // WHY: "Mrs." must be masked before a shorter entry could claim part of it
        entries.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then_with(|| a.0.cmp(&b.0)));
        entries.dedup_by(|a, b| a.0 == b.0);
        Self { entries }
    }

    /// Guard covering [`TITLE_ABBREVIATIONS`] with default placeholders
    pub fn titles() -> Self {
        Self::new(
            TITLE_ABBREVIATIONS
                .iter()
                .map(|abbr| (abbr.to_string(), default_placeholder(abbr))),
        )
    }

    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    /// Replace every guarded abbreviation with its placeholder
    pub fn protect(&self, text: &str) -> String {
        let mut protected = text.to_string();
        for (abbr, placeholder) in &self.entries {
            if protected.contains(abbr.as_str()) {
                protected = protected.replace(abbr.as_str(), placeholder);
            }
        }
        protected
    }

    /// Undo [`protect`](Self::protect)
    pub fn restore(&self, text: &str) -> String {
        let mut restored = text.to_string();
        for (abbr, placeholder) in &self.entries {
            if restored.contains(placeholder.as_str()) {
                restored = restored.replace(placeholder.as_str(), abbr);
            }
        }
        restored
    }
}

impl Default for AbbreviationGuard {
    fn default() -> Self {
        Self::titles()
    }
}
