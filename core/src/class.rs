//! Auxiliary classes.

use crate::{vocab, ClassId, Expression};
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// The superclass an auxiliary class is declared under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParentKind {
    /// Defined using at least one external specifier.
    MinimumClade,
    /// Defined by internal specifiers alone.
    MaximumClade,
}

impl ParentKind {
    pub fn for_externals(external_count: usize) -> Self {
        if external_count > 0 {
            ParentKind::MinimumClade
        } else {
            ParentKind::MaximumClade
        }
    }

    pub fn iri(&self) -> &'static str {
        match self {
            ParentKind::MinimumClade => vocab::PHYLOREF_MINIMUM_CLADE,
            ParentKind::MaximumClade => vocab::PHYLOREF_MAXIMUM_CLADE,
        }
    }
}

/// A named, reusable sub-expression owned by one phyloreference.
///
/// Other expressions refer to it only through `Expression::ClassReference`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuxiliaryClass {
    pub id: ClassId,
    /// Rendered from the specifier sets, e.g. `(Aus bus & Cus dus ~ Eus fus)`.
    pub label: String,
    pub parent_kind: ParentKind,
    /// Alternative expressions, each equivalent to this class.
    pub body: Vec<Expression>,
}

impl Serialize for AuxiliaryClass {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(5))?;
        map.serialize_entry("@id", &self.id)?;
        map.serialize_entry("@type", vocab::OWL_CLASS)?;
        map.serialize_entry("label", &self.label)?;
        map.serialize_entry("subClassOf", self.parent_kind.iri())?;
        map.serialize_entry("equivalentClass", &self.body)?;
        map.end()
    }
}
