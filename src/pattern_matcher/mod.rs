// WHY: Exact token-sequence search with two interchangeable algorithms
// Mirrors the dual detector layout: one front type, one submodule per algorithm

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use crate::error::EngineError;

pub mod boyer_moore;
pub mod kmp;

/// Search algorithm selector, closed set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Prefix-table (border function) scan
    Kmp,
    /// Last-occurrence right-to-left window scan
    BoyerMoore,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::Kmp, Algorithm::BoyerMoore];

    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Kmp => "KMP",
            Algorithm::BoyerMoore => "BoyerMoore",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("kmp") {
            Ok(Algorithm::Kmp)
        } else if trimmed.eq_ignore_ascii_case("boyermoore") || trimmed.eq_ignore_ascii_case("boyer-moore") {
            Ok(Algorithm::BoyerMoore)
        } else {
            // WHY: an unknown selector must never fall back to a default algorithm
            Err(EngineError::UnsupportedAlgorithm(s.to_string()))
        }
    }
}

/// Precomputed shift table for one needle
#[derive(Debug, Clone)]
enum ShiftTable<'p, T> {
    Border(Vec<usize>),
    LastOccurrence(HashMap<&'p T, usize>),
}

/// A needle compiled for one algorithm, reusable across haystacks
///
/// The empty needle matches every haystack at index 0, including an empty one.
#[derive(Debug, Clone)]
pub struct Pattern<'p, T> {
    needle: &'p [T],
    table: ShiftTable<'p, T>,
}

impl<'p, T: Eq + Hash> Pattern<'p, T> {
    /// Build the algorithm's table for `needle`
    pub fn compile(algorithm: Algorithm, needle: &'p [T]) -> Self {
        let table = match algorithm {
            Algorithm::Kmp => ShiftTable::Border(kmp::border_table(needle)),
            Algorithm::BoyerMoore => ShiftTable::LastOccurrence(boyer_moore::last_occurrence_table(needle)),
        };
        Self { needle, table }
    }

    pub fn algorithm(&self) -> Algorithm {
        match self.table {
            ShiftTable::Border(_) => Algorithm::Kmp,
            ShiftTable::LastOccurrence(_) => Algorithm::BoyerMoore,
        }
    }

    /// Start index of the first occurrence of the needle in `haystack`
    pub fn find_in(&self, haystack: &[T]) -> Option<usize> {
        if self.needle.is_empty() {
            return Some(0);
        }
        if self.needle.len() > haystack.len() {
            return None;
        }
        match &self.table {
            ShiftTable::Border(table) => kmp::find(haystack, self.needle, table),
            ShiftTable::LastOccurrence(table) => boyer_moore::find(haystack, self.needle, table),
        }
    }

    pub fn is_found_in(&self, haystack: &[T]) -> bool {
        self.find_in(haystack).is_some()
    }
}

/// Stateless front end for one-shot searches
#[derive(Debug, Clone, Copy)]
pub struct PatternMatcher {
    algorithm: Algorithm,
}

impl PatternMatcher {
    pub fn new(algorithm: Algorithm) -> Self {
        Self { algorithm }
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// True iff `needle` occurs as a contiguous, element-equal run of `haystack`
    pub fn exists<T: Eq + Hash>(&self, haystack: &[T], needle: &[T]) -> bool {
        Pattern::compile(self.algorithm, needle).is_found_in(haystack)
    }

    pub fn find<T: Eq + Hash>(&self, haystack: &[T], needle: &[T]) -> Option<usize> {
        Pattern::compile(self.algorithm, needle).find_in(haystack)
    }
}
