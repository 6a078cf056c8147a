//! Phyloreference records: what synthesis consumes and what it produces.

use crate::{vocab, AuxiliaryClass, ClassId, Expression, Specifier};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A clade definition as handed to the synthesizer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhylorefInput {
    #[serde(rename = "@id", default)]
    pub id: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub internal_specifiers: Vec<Specifier>,
    #[serde(default)]
    pub external_specifiers: Vec<Specifier>,
}

impl PhylorefInput {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn internal(mut self, specifier: Specifier) -> Self {
        self.internal_specifiers.push(specifier);
        self
    }

    pub fn external(mut self, specifier: Specifier) -> Self {
        self.external_specifiers.push(specifier);
        self
    }

    /// Label if present, id otherwise. Used in diagnostics.
    pub fn display_name(&self) -> &str {
        if self.label.is_empty() {
            &self.id
        } else {
            &self.label
        }
    }
}

/// A Phyx file: a set of phyloreferences, usually from one publication.
///
/// Fields other than the phyloreferences are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct PhyxDocument {
    #[serde(default)]
    pub phylorefs: Vec<PhylorefInput>,
}

/// A synthesized phyloreference.
///
/// Every `ClassReference` inside `equivalent_class` or an auxiliary class body
/// resolves to an entry of `auxiliary_classes`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phyloreference {
    pub id: String,
    pub label: String,
    pub internal_specifiers: Vec<Specifier>,
    pub external_specifiers: Vec<Specifier>,
    pub equivalent_class: Vec<Expression>,
    pub auxiliary_classes: Vec<AuxiliaryClass>,
    /// Why no expression could be synthesized, if that is the case.
    pub malformed: Option<String>,
}

impl Phyloreference {
    /// Start an output record for `input` with no expressions.
    pub fn from_input(input: &PhylorefInput) -> Self {
        Self {
            id: input.id.clone(),
            label: input.label.clone(),
            internal_specifiers: input.internal_specifiers.clone(),
            external_specifiers: input.external_specifiers.clone(),
            equivalent_class: Vec::new(),
            auxiliary_classes: Vec::new(),
            malformed: None,
        }
    }

    pub fn is_malformed(&self) -> bool {
        self.malformed.is_some()
    }

    /// Look up an auxiliary class by id.
    pub fn auxiliary_class(&self, id: &ClassId) -> Option<&AuxiliaryClass> {
        self.auxiliary_classes.iter().find(|c| &c.id == id)
    }

    /// Class references that do not resolve to an auxiliary class of this record.
    pub fn dangling_references(&self) -> Vec<ClassId> {
        let known: HashSet<&ClassId> = self.auxiliary_classes.iter().map(|c| &c.id).collect();
        let bodies = self.auxiliary_classes.iter().flat_map(|c| c.body.iter());

        let mut dangling = Vec::new();
        for expr in self.equivalent_class.iter().chain(bodies) {
            for id in expr.class_references() {
                if !known.contains(id) && !dangling.contains(id) {
                    dangling.push(id.clone());
                }
            }
        }
        dangling
    }
}

impl Serialize for Phyloreference {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("@id", &self.id)?;
        map.serialize_entry("@type", &[vocab::PHYLOREFERENCE, vocab::OWL_CLASS])?;
        map.serialize_entry("label", &self.label)?;
        map.serialize_entry("hasInternalSpecifier", &self.internal_specifiers)?;
        map.serialize_entry("hasExternalSpecifier", &self.external_specifiers)?;
        map.serialize_entry("hasAdditionalClass", &self.auxiliary_classes)?;
        if let Some(reason) = &self.malformed {
            map.serialize_entry("malformedPhyloreference", reason)?;
        } else {
            map.serialize_entry("equivalentClass", &self.equivalent_class)?;
        }
        map.end()
    }
}
