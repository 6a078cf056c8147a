//! The internal combinator: every MRCA alternative for a set of internal
//! specifiers.
//!
//! For specifiers `S` split into `remaining` and `selected`, a clade is the
//! MRCA of `S` when it has a child that contains everything in `selected`
//! while excluding the lineage leading to `remaining`. Enumerating every way
//! to move specifiers from `remaining` into `selected` covers every possible
//! topology of the tree, since some split is always the root split of the
//! clade.

use crate::synthesis::{appended, split_off};
use crate::{Synthesis, SynthesisError, SynthesisResult};
use clado_core::{Expression, Property, Specifier};
use clado_registry::ClassRegistry;
use tracing::debug;

impl<'a> Synthesis<'a> {
    /// Every expression for the MRCA of `remaining ∪ selected`, given the
    /// ordering already fixed by `selected`.
    pub fn expressions_for_internals(
        &mut self,
        registry: &mut ClassRegistry,
        remaining: &[Specifier],
        selected: &[Specifier],
    ) -> SynthesisResult<Vec<Expression>> {
        debug!(
            owner = registry.owner(),
            remaining = remaining.len(),
            selected = selected.len(),
            "expressions for internals"
        );

        if selected.is_empty() {
            match remaining {
                [] | [_] => {
                    return Err(SynthesisError::insufficient(
                        remaining.len(),
                        "a clade of internal specifiers",
                    ))
                }
                [a, b] => return Ok(vec![self.mrca_of_two(a, b)]),
                _ => {}
            }
        }

        let mut exprs = Vec::new();

        if !selected.is_empty() {
            let remaining_expr = self.clade_of(registry, remaining)?;
            let selected_expr = self.clade_of(registry, selected)?;
            exprs.push(Expression::some(
                Property::HasChild,
                Expression::and(vec![
                    Expression::some(Property::ExcludesLineageTo, remaining_expr),
                    selected_expr,
                ]),
            ));
        }

        // Larger selections mirror smaller ones already enumerated.
        if remaining.len() > 1 && selected.len() <= remaining.len() {
            for index in 0..remaining.len() {
                let (rest, picked) = split_off(remaining, index);
                let chosen = appended(selected, picked);
                exprs.extend(self.expressions_for_internals(registry, &rest, &chosen)?);
            }
        }

        Ok(exprs)
    }

    /// A single expression for the clade containing `set`. Sets of three or
    /// more become auxiliary classes.
    fn clade_of(
        &mut self,
        registry: &mut ClassRegistry,
        set: &[Specifier],
    ) -> SynthesisResult<Expression> {
        match set {
            [only] => Ok(self.includes(only)),
            [a, b] => Ok(self.mrca_of_two(a, b)),
            _ => registry.get_or_create(set, &[], |reg| {
                self.expressions_for_internals(reg, set, &[])
            }),
        }
    }
}
