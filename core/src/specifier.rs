//! Specifiers: the included and excluded reference organisms of a clade.

use crate::{TaxonomicUnit, UnitKey};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A reference to one or more taxonomic units.
///
/// Only the first referenced unit takes part in synthesis; callers that
/// care about the remaining units are told through a warning.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Specifier {
    /// Optional identifier, used in diagnostics.
    #[serde(rename = "@id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Referenced taxonomic units.
    #[serde(rename = "referencesTaxonomicUnits", default)]
    pub units: Vec<TaxonomicUnit>,
}

impl Specifier {
    pub fn new(unit: TaxonomicUnit) -> Self {
        Self {
            id: None,
            units: vec![unit],
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_unit(mut self, unit: TaxonomicUnit) -> Self {
        self.units.push(unit);
        self
    }

    /// The unit synthesis works with.
    pub fn first_unit(&self) -> Option<&TaxonomicUnit> {
        self.units.first()
    }

    /// Identity of the first unit; `Unresolved` when there is none.
    pub fn identity(&self) -> UnitKey {
        self.first_unit()
            .map(TaxonomicUnit::primary_identity)
            .unwrap_or(UnitKey::Unresolved)
    }
}

impl fmt::Display for Specifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.id {
            Some(id) => write!(f, "{} ({})", id, self.identity()),
            None => write!(f, "{}", self.identity()),
        }
    }
}

/// Which specifier list of a phyloreference a specifier belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecifierKind {
    Internal,
    External,
}

impl SpecifierKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpecifierKind::Internal => "internal",
            SpecifierKind::External => "external",
        }
    }
}

impl fmt::Display for SpecifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
