//! Class expressions.
//!
//! Expressions are acyclic trees built bottom-up and never mutated after
//! construction. They serialize to the OWL JSON-LD restriction shape and
//! display as Manchester syntax.

use crate::{vocab, ClassId};
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use std::fmt;

/// The fixed property vocabulary restrictions range over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    IncludesTu,
    ExcludesTu,
    ExcludesLineageTo,
    HasChild,
    HasAncestor,
    HasName,
    ScientificName,
    OrganismId,
}

impl Property {
    /// Compact IRI used on the wire.
    pub fn iri(&self) -> &'static str {
        match self {
            Property::IncludesTu => vocab::PHYLOREF_INCLUDES_TU,
            Property::ExcludesTu => vocab::PHYLOREF_EXCLUDES_TU,
            Property::ExcludesLineageTo => vocab::PHYLOREF_EXCLUDES_LINEAGE_TO,
            Property::HasChild => vocab::CDAO_HAS_CHILD,
            Property::HasAncestor => vocab::CDAO_HAS_ANCESTOR,
            Property::HasName => vocab::TC_HAS_NAME,
            Property::ScientificName => vocab::DWC_SCIENTIFIC_NAME,
            Property::OrganismId => vocab::DWC_ORGANISM_ID,
        }
    }

    /// Human-readable name used in Manchester syntax.
    pub fn name(&self) -> &'static str {
        match self {
            Property::IncludesTu => "includes_TU",
            Property::ExcludesTu => "excludes_TU",
            Property::ExcludesLineageTo => "excludes_lineage_to",
            Property::HasChild => "has_Child",
            Property::HasAncestor => "has_Ancestor",
            Property::HasName => "hasName",
            Property::ScientificName => "dwc:scientificName",
            Property::OrganismId => "dwc:organismID",
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What a restriction points at.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Filler {
    /// `someValuesFrom`: an existential over a class expression.
    Class(Box<Expression>),
    /// `hasValue`: a literal value.
    Value(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Restriction {
    pub property: Property,
    pub filler: Filler,
}

/// A class expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expression {
    Restriction(Restriction),
    Intersection(Vec<Expression>),
    /// Reference to an auxiliary class owned by the same phyloreference.
    ClassReference(ClassId),
    /// A class from an imported vocabulary (e.g. a nomenclatural code).
    Named(&'static str),
    /// Placeholder for a taxonomic unit that could not be resolved.
    Empty,
}

impl Expression {
    /// `property some filler`
    pub fn some(property: Property, filler: Expression) -> Self {
        Expression::Restriction(Restriction {
            property,
            filler: Filler::Class(Box::new(filler)),
        })
    }

    /// `property value "literal"`
    pub fn value(property: Property, value: impl Into<String>) -> Self {
        Expression::Restriction(Restriction {
            property,
            filler: Filler::Value(value.into()),
        })
    }

    pub fn and(operands: Vec<Expression>) -> Self {
        Expression::Intersection(operands)
    }

    pub fn reference(id: ClassId) -> Self {
        Expression::ClassReference(id)
    }

    /// Is this exactly a restriction on `property`?
    pub fn is_restriction_on(&self, property: Property) -> bool {
        matches!(self, Expression::Restriction(r) if r.property == property)
    }

    /// The restriction, if this is one.
    pub fn as_restriction(&self) -> Option<&Restriction> {
        match self {
            Expression::Restriction(r) => Some(r),
            _ => None,
        }
    }

    /// The operands, if this is an intersection.
    pub fn as_intersection(&self) -> Option<&[Expression]> {
        match self {
            Expression::Intersection(operands) => Some(operands),
            _ => None,
        }
    }

    /// All auxiliary class ids referenced anywhere in this expression.
    pub fn class_references(&self) -> Vec<&ClassId> {
        let mut refs = Vec::new();
        self.collect_references(&mut refs);
        refs
    }

    fn collect_references<'a>(&'a self, refs: &mut Vec<&'a ClassId>) {
        match self {
            Expression::ClassReference(id) => refs.push(id),
            Expression::Intersection(operands) => {
                for operand in operands {
                    operand.collect_references(refs);
                }
            }
            Expression::Restriction(Restriction {
                filler: Filler::Class(inner),
                ..
            }) => inner.collect_references(refs),
            _ => {}
        }
    }

    /// All literal values (scientific names, occurrence ids) in this expression.
    pub fn literals(&self) -> Vec<&str> {
        let mut values = Vec::new();
        self.collect_literals(&mut values);
        values
    }

    fn collect_literals<'a>(&'a self, values: &mut Vec<&'a str>) {
        match self {
            Expression::Restriction(r) => match &r.filler {
                Filler::Class(inner) => inner.collect_literals(values),
                Filler::Value(v) => values.push(v),
            },
            Expression::Intersection(operands) => {
                for operand in operands {
                    operand.collect_literals(values);
                }
            }
            _ => {}
        }
    }

    /// Whether this needs parentheses when nested inside another expression.
    fn is_compound(&self) -> bool {
        matches!(self, Expression::Restriction(_) | Expression::Intersection(_))
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Restriction(r) => match &r.filler {
                Filler::Class(inner) if inner.is_compound() => {
                    write!(f, "{} some ({})", r.property, inner)
                }
                Filler::Class(inner) => write!(f, "{} some {}", r.property, inner),
                Filler::Value(v) => write!(f, "{} value \"{}\"", r.property, v),
            },
            Expression::Intersection(operands) => {
                for (i, operand) in operands.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" and ")?;
                    }
                    if matches!(operand, Expression::Intersection(_)) {
                        write!(f, "({})", operand)?;
                    } else {
                        write!(f, "{}", operand)?;
                    }
                }
                Ok(())
            }
            Expression::ClassReference(id) => write!(f, "{}", id),
            Expression::Named(iri) => f.write_str(iri),
            Expression::Empty => f.write_str("(unresolved)"),
        }
    }
}

impl Serialize for Expression {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Expression::Restriction(r) => {
                let mut map = serializer.serialize_map(Some(3))?;
                map.serialize_entry("@type", vocab::OWL_RESTRICTION)?;
                map.serialize_entry("onProperty", r.property.iri())?;
                match &r.filler {
                    Filler::Class(inner) => map.serialize_entry("someValuesFrom", inner)?,
                    Filler::Value(v) => map.serialize_entry("hasValue", v)?,
                }
                map.end()
            }
            Expression::Intersection(operands) => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("@type", vocab::OWL_CLASS)?;
                map.serialize_entry("intersectionOf", operands)?;
                map.end()
            }
            Expression::ClassReference(id) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("@id", id)?;
                map.end()
            }
            Expression::Named(iri) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("@id", iri)?;
                map.end()
            }
            Expression::Empty => serializer.serialize_map(Some(0))?.end(),
        }
    }
}
