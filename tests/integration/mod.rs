// Integration test utilities and common code
// WHY: Centralized utilities avoid duplication across integration tests

#![allow(dead_code)]

pub mod fixtures;

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use posgrammar::{build_dictionary, DictionaryIndex};

/// Test fixture helper for creating temporary dictionary and document files
pub struct TestFixture {
    pub temp_dir: TempDir,
    pub root_path: PathBuf,
}

impl TestFixture {
    /// Create a new test fixture with temporary directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root_path = temp_dir.path().to_path_buf();

        Self { temp_dir, root_path }
    }

    /// Write a file below the fixture root, creating parent directories as needed
    pub fn create_file<P: AsRef<Path>>(&self, relative_path: P, content: &str) -> PathBuf {
        let file_path = self.root_path.join(relative_path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }

        fs::write(&file_path, content).expect("Failed to write test file");
        file_path
    }

    /// Write the standard lexicon CSV and return its path
    pub fn create_dictionary_csv(&self) -> PathBuf {
        self.create_file("dictionary/words_pos.csv", fixtures::LEXICON_CSV)
    }
}

/// In-memory index equivalent to `fixtures::LEXICON_CSV`
pub fn lexicon() -> DictionaryIndex {
    build_dictionary(fixtures::LEXICON_PAIRS.iter().copied())
}
