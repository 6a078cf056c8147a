//! Deduplication keys for auxiliary classes.

use clado_core::{Specifier, UnitKey};
use std::fmt;

/// Identifies the class "clade of `internals`, excluding `externals`".
///
/// Both sides are sorted, so specifier order never matters. Equality is over
/// the resolved unit identities, never over their rendering.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClassKey {
    internals: Vec<UnitKey>,
    externals: Vec<UnitKey>,
}

impl ClassKey {
    pub fn new(internals: &[Specifier], externals: &[Specifier]) -> Self {
        Self::from_units(
            internals.iter().map(Specifier::identity).collect(),
            externals.iter().map(Specifier::identity).collect(),
        )
    }

    pub fn from_units(mut internals: Vec<UnitKey>, mut externals: Vec<UnitKey>) -> Self {
        internals.sort();
        externals.sort();
        Self {
            internals,
            externals,
        }
    }

    /// Human-readable label, e.g. `(Aus bus & Cus dus ~ Eus fus V Gus hus)`.
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ClassKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, unit) in self.internals.iter().enumerate() {
            if i > 0 {
                f.write_str(" & ")?;
            }
            write!(f, "{}", unit)?;
        }
        if !self.externals.is_empty() {
            f.write_str(" ~ ")?;
            for (i, unit) in self.externals.iter().enumerate() {
                if i > 0 {
                    f.write_str(" V ")?;
                }
                write!(f, "{}", unit)?;
            }
        }
        f.write_str(")")
    }
}
