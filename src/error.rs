// WHY: single typed error for the engine so callers can tell a bad selector apart from a broken pattern
// Dictionary loading reports through anyhow with file-level context instead

use thiserror::Error;

/// Errors surfaced by the validation engine
#[derive(Error, Debug)]
pub enum EngineError {
    /// Algorithm selector outside the supported set
    #[error("unsupported search algorithm '{0}' (expected 'KMP' or 'BoyerMoore')")]
    UnsupportedAlgorithm(String),

    /// Internal pattern failed to compile
    #[error("pattern compilation failed: {0}")]
    Pattern(#[from] regex_automata::meta::BuildError),
}

pub type Result<T> = std::result::Result<T, EngineError>;
