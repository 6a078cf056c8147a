//! Identity types for synthesized classes.

use serde::{Serialize, Serializer};
use std::fmt;

/// Identifier of an auxiliary class.
///
/// Auxiliary class ids are scoped to the phyloreference that spawned them,
/// so two runs over different phyloreferences never share an id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassId(String);

impl ClassId {
    /// Create a ClassId from a raw string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id of the `index`-th auxiliary class owned by `owner`.
    pub fn additional(owner: &str, index: usize) -> Self {
        Self(format!("{}_additional{}", owner, index))
    }

    /// Get the raw value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for ClassId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}
