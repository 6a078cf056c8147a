//! Synthesis configuration and admission control.

use clado_core::PhylorefInput;
use serde::Deserialize;
use thiserror::Error;

/// Bounds on the phyloreferences a synthesizer accepts.
///
/// The number of internal expressions grows factorially with the number of
/// internal specifiers, so oversized inputs are rejected before any work is
/// done.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SynthesisConfig {
    /// Most internal specifiers a phyloreference may have.
    pub max_internal_specifiers: usize,
    /// Most external specifiers a phyloreference may have.
    pub max_external_specifiers: usize,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            max_internal_specifiers: 8,
            max_external_specifiers: 8,
        }
    }
}

impl SynthesisConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// A configuration that admits every phyloreference.
    pub fn unbounded() -> Self {
        Self {
            max_internal_specifiers: usize::MAX,
            max_external_specifiers: usize::MAX,
        }
    }

    pub fn with_max_internal_specifiers(mut self, max: usize) -> Self {
        self.max_internal_specifiers = max;
        self
    }

    pub fn with_max_external_specifiers(mut self, max: usize) -> Self {
        self.max_external_specifiers = max;
        self
    }

    /// Check `input` against the configured bounds.
    pub fn admit(&self, input: &PhylorefInput) -> Result<(), Rejection> {
        let internal = input.internal_specifiers.len();
        if internal > self.max_internal_specifiers {
            return Err(Rejection::TooManyInternalSpecifiers {
                count: internal,
                max: self.max_internal_specifiers,
            });
        }

        let external = input.external_specifiers.len();
        if external > self.max_external_specifiers {
            return Err(Rejection::TooManyExternalSpecifiers {
                count: external,
                max: self.max_external_specifiers,
            });
        }

        Ok(())
    }
}

/// Why a phyloreference was skipped without synthesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("{count} internal specifiers exceed the limit of {max}")]
    TooManyInternalSpecifiers { count: usize, max: usize },

    #[error("{count} external specifiers exceed the limit of {max}")]
    TooManyExternalSpecifiers { count: usize, max: usize },
}
