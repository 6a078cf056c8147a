//! Synthesis error types.

use clado_registry::RegistryError;
use thiserror::Error;

/// Errors that can occur during expression synthesis.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SynthesisError {
    /// Fewer specifiers than the requested expression needs.
    #[error("Insufficient specifiers: {count} given for {context}")]
    InsufficientSpecifiers { count: usize, context: String },

    /// The external combinator was called with nothing left to exclude.
    #[error("No external specifiers remain for phyloreference '{owner}'")]
    NoExternalsRemaining { owner: String },

    /// A class reference does not resolve to an auxiliary class.
    #[error("Class reference '{id}' in phyloreference '{owner}' has no auxiliary class")]
    DanglingReference { owner: String, id: String },
}

impl SynthesisError {
    pub fn insufficient(count: usize, context: impl Into<String>) -> Self {
        Self::InsufficientSpecifiers {
            count,
            context: context.into(),
        }
    }

    pub fn no_externals_remaining(owner: impl Into<String>) -> Self {
        Self::NoExternalsRemaining {
            owner: owner.into(),
        }
    }

    /// True for errors caused by misuse of the synthesizer rather than by the
    /// phyloreference being synthesized. These abort a batch.
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            Self::NoExternalsRemaining { .. } | Self::DanglingReference { .. }
        )
    }
}

impl From<RegistryError> for SynthesisError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::InsufficientSpecifiers { internal, external } => Self::insufficient(
                internal,
                format!("an auxiliary class with {} external specifiers", external),
            ),
        }
    }
}

/// Result type for synthesis operations.
pub type SynthesisResult<T> = Result<T, SynthesisError>;
