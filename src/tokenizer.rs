// WHY: one word-boundary scan shared by word validation and the noun/verb rule
// Uses regex-automata's meta engine so Unicode word characters are recognized

use regex_automata::meta::Regex;

use crate::error::Result;

/// Maximal runs of word characters (letters, digits, underscore)
const WORD_PATTERN: &str = r"\w+";

/// Whole token made of decimal digits (Unicode `Nd`)
const NUMERIC_PATTERN: &str = r"\A\d+\z";

/// Compiled word-boundary tokenizer
#[derive(Debug, Clone)]
pub struct WordTokenizer {
    regex: Regex,
    numeric: Regex,
}

impl WordTokenizer {
    pub fn new() -> Result<Self> {
        Ok(Self {
            regex: Regex::new(WORD_PATTERN)?,
            numeric: Regex::new(NUMERIC_PATTERN)?,
        })
    }

    /// Tokens in document order, borrowed from `text`
    pub fn tokens<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.regex.find_iter(text).map(|m| &text[m.range()]).collect()
    }

    /// Lowercased tokens for dictionary lookup
    pub fn lowercase_tokens(&self, text: &str) -> Vec<String> {
        self.regex
            .find_iter(text)
            .map(|m| text[m.range()].to_lowercase())
            .collect()
    }

    /// True when the token is a non-empty run of decimal digits
    ///
    /// Letter-like numerals such as `Ⅻ` or `½` are not digits and stay words.
    pub fn is_numeric(&self, token: &str) -> bool {
        self.numeric.is_match(token)
    }
}
