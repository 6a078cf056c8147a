//! Error types for the test framework.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for scenario operations.
pub type TestResult<T> = Result<T, TestError>;

/// Errors that can occur when running scenarios.
#[derive(Debug, Error)]
pub enum TestError {
    /// Failed to read a file.
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to parse a fixture.
    #[error("failed to parse fixture '{path}': {message}")]
    FixtureParse { path: PathBuf, message: String },

    /// The fixture has no phyloreference with the requested id.
    #[error("phyloreference '{id}' not found in fixture '{path}'")]
    PhylorefNotFound { path: PathBuf, id: String },

    /// No input was given.
    #[error("input not specified for scenario '{scenario}'")]
    MissingInput { scenario: String },

    /// Assertion failed.
    #[error("assertion failed for scenario '{scenario}': {message}")]
    AssertionFailed { scenario: String, message: String },

    /// Synthesis error.
    #[error("synthesis error: {0}")]
    Synthesis(#[from] clado_compiler::SynthesisError),
}

impl TestError {
    pub fn file_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileRead {
            path: path.into(),
            source,
        }
    }

    pub fn fixture_parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::FixtureParse {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn phyloref_not_found(path: impl Into<PathBuf>, id: impl Into<String>) -> Self {
        Self::PhylorefNotFound {
            path: path.into(),
            id: id.into(),
        }
    }

    pub fn missing_input(scenario: impl Into<String>) -> Self {
        Self::MissingInput {
            scenario: scenario.into(),
        }
    }

    pub fn assertion_failed(scenario: impl Into<String>, message: impl Into<String>) -> Self {
        Self::AssertionFailed {
            scenario: scenario.into(),
            message: message.into(),
        }
    }
}
