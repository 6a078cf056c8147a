//! Recoverable conditions noticed during synthesis.

use clado_core::SpecifierKind;
use std::fmt;

/// A non-fatal problem. Synthesis continues with a best-effort expression.
///
/// Warnings name the specifier by its list and position, since two
/// specifiers may render identically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SynthesisWarning {
    /// The taxonomic unit synthesis uses has neither a usable scientific name
    /// nor a specimen; a degenerate placeholder stands in for it.
    UnresolvableSpecifier {
        kind: SpecifierKind,
        index: usize,
        specifier: String,
    },
    /// The specifier references several taxonomic units but only the first
    /// one is used.
    AdditionalUnitsIgnored {
        kind: SpecifierKind,
        index: usize,
        specifier: String,
        count: usize,
    },
}

impl fmt::Display for SynthesisWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SynthesisWarning::UnresolvableSpecifier {
                kind,
                index,
                specifier,
            } => write!(
                f,
                "{} specifier {} ({}): taxonomic unit could not be converted into a restriction",
                kind, index, specifier
            ),
            SynthesisWarning::AdditionalUnitsIgnored {
                kind,
                index,
                specifier,
                count,
            } => write!(
                f,
                "{} specifier {} ({}) references {} taxonomic units; only the first is used",
                kind, index, specifier, count
            ),
        }
    }
}
