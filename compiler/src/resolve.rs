//! Resolution of specifiers into leaf restrictions.

use crate::SynthesisWarning;
use clado_core::{Expression, Property, Specifier, SpecifierKind, UnitKey};
use tracing::warn;

/// Turns specifiers into the restrictions that identify their taxonomic
/// units, and collects the warnings for specifiers that cannot be resolved
/// cleanly.
///
/// Resolution itself records nothing: the combinators resolve the same
/// specifier many times. Warnings come from [`SpecifierResolver::inspect`],
/// called once for each position in the specifier lists.
#[derive(Debug, Default)]
pub struct SpecifierResolver {
    warnings: Vec<SynthesisWarning>,
}

impl SpecifierResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// All restrictions for the first taxonomic unit of `specifier`.
    ///
    /// Never empty: an unresolvable identity yields `Expression::Empty`.
    pub fn resolve(&self, specifier: &Specifier) -> Vec<Expression> {
        let identities = specifier
            .first_unit()
            .map(|unit| unit.identities())
            .unwrap_or_default();
        if identities.is_empty() {
            return vec![Expression::Empty];
        }

        identities
            .iter()
            .map(|identity| restriction_for(identity).unwrap_or(Expression::Empty))
            .collect()
    }

    /// The restriction synthesis uses for `specifier`.
    pub fn leaf(&self, specifier: &Specifier) -> Expression {
        restriction_for(&specifier.identity()).unwrap_or(Expression::Empty)
    }

    /// Check the specifier at `index` of the `kind` list.
    ///
    /// Only the leaf counts: a bad secondary name on a unit whose first name
    /// resolves is not reported.
    pub fn inspect(&mut self, kind: SpecifierKind, index: usize, specifier: &Specifier) {
        if specifier.units.len() > 1 {
            self.record(SynthesisWarning::AdditionalUnitsIgnored {
                kind,
                index,
                specifier: specifier.to_string(),
                count: specifier.units.len(),
            });
        }

        if self.leaf(specifier) == Expression::Empty {
            self.record(SynthesisWarning::UnresolvableSpecifier {
                kind,
                index,
                specifier: specifier.to_string(),
            });
        }
    }

    pub fn warnings(&self) -> &[SynthesisWarning] {
        &self.warnings
    }

    pub fn into_warnings(self) -> Vec<SynthesisWarning> {
        self.warnings
    }

    fn record(&mut self, warning: SynthesisWarning) {
        warn!("{}", warning);
        self.warnings.push(warning);
    }
}

/// The restriction identifying one taxonomic unit identity.
pub fn restriction_for(identity: &UnitKey) -> Option<Expression> {
    match identity {
        UnitKey::Name { canonical, code } => Some(Expression::some(
            Property::HasName,
            Expression::and(vec![
                Expression::Named(code.iri()),
                Expression::value(Property::ScientificName, canonical.as_str()),
            ]),
        )),
        UnitKey::Specimen { occurrence_id } => Some(Expression::value(
            Property::OrganismId,
            occurrence_id.as_str(),
        )),
        UnitKey::Unresolved => None,
    }
}
