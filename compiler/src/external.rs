//! The external combinator: layering exclusions onto a clade expression.
//!
//! Each external specifier is excluded either directly (`excludes_TU`) or as
//! an ancestor of the clade (`has_Ancestor some excludes_TU`). With several
//! external specifiers every ordering is tried, and each partial result is
//! registered as an auxiliary class so that later exclusions can refer to it.

use crate::synthesis::{appended, split_off};
use crate::{Synthesis, SynthesisError, SynthesisResult};
use clado_core::{Expression, Property, Specifier};
use clado_registry::ClassRegistry;
use tracing::debug;

impl<'a> Synthesis<'a> {
    /// Every expression for `accumulated` with all of `remaining` excluded.
    ///
    /// `selected` holds the externals already folded into `accumulated`.
    pub fn expressions_for_externals(
        &mut self,
        registry: &mut ClassRegistry,
        accumulated: &Expression,
        remaining: &[Specifier],
        selected: &[Specifier],
    ) -> SynthesisResult<Vec<Expression>> {
        debug!(
            owner = registry.owner(),
            remaining = remaining.len(),
            selected = selected.len(),
            "expressions for externals"
        );

        match remaining {
            [] => Err(SynthesisError::no_externals_remaining(registry.owner())),
            [last] => Ok(self.exclusions_for(accumulated, last)),
            _ => {
                let internals = self.internals;
                let mut exprs = Vec::new();
                for index in 0..remaining.len() {
                    let (rest, picked) = split_off(remaining, index);
                    let chosen = appended(selected, picked.clone());

                    // Keyed on the externals chosen so far; the first
                    // accumulated expression to reach a key supplies its body.
                    let narrowed = registry.get_or_create::<_, SynthesisError>(
                        internals,
                        &chosen,
                        |_| Ok(self.exclusions_for(accumulated, &picked)),
                    )?;
                    exprs.extend(self.expressions_for_externals(
                        registry, &narrowed, &rest, &chosen,
                    )?);
                }
                Ok(exprs)
            }
        }
    }

    /// The ways of excluding `external` from `accumulated`.
    ///
    /// A clade defined only by `includes_TU` cannot have the excluded unit as
    /// an ancestor, so only the direct exclusion is produced for it.
    pub fn exclusions_for(&mut self, accumulated: &Expression, external: &Specifier) -> Vec<Expression> {
        let excluded = self.excludes(external);

        let mut exprs = vec![Expression::and(vec![accumulated.clone(), excluded.clone()])];
        if !accumulated.is_restriction_on(Property::IncludesTu) {
            exprs.push(Expression::and(vec![
                accumulated.clone(),
                Expression::some(Property::HasAncestor, excluded),
            ]));
        }
        exprs
    }
}
