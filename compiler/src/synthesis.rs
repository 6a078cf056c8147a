//! Per-phyloreference synthesis state.

use crate::{pair, SpecifierResolver, SynthesisWarning};
use clado_core::{Expression, PhylorefInput, Specifier, SpecifierKind};

/// State shared by the combinators while one phyloreference is synthesized.
///
/// The auxiliary class registry is passed alongside rather than held here, so
/// a registry build callback can borrow this state while the registry itself
/// is borrowed by the call that runs the callback.
#[derive(Debug)]
pub struct Synthesis<'a> {
    /// Every internal specifier of the phyloreference. Keys external classes.
    pub(crate) internals: &'a [Specifier],
    pub(crate) resolver: SpecifierResolver,
}

impl<'a> Synthesis<'a> {
    pub fn new(internals: &'a [Specifier]) -> Self {
        Self {
            internals,
            resolver: SpecifierResolver::new(),
        }
    }

    /// `includes_TU some leaf(specifier)`
    pub fn includes(&mut self, specifier: &Specifier) -> Expression {
        pair::includes(self.resolver.leaf(specifier))
    }

    /// `excludes_TU some leaf(specifier)`
    pub fn excludes(&mut self, specifier: &Specifier) -> Expression {
        pair::excludes(self.resolver.leaf(specifier))
    }

    /// MRCA of exactly two specifiers; see [`pair::mrca_of_two`].
    pub fn mrca_of_two(&mut self, a: &Specifier, b: &Specifier) -> Expression {
        let a = self.resolver.leaf(a);
        let b = self.resolver.leaf(b);
        pair::mrca_of_two(a, b)
    }

    /// Record the warnings for each specifier of `input`, once per position.
    pub fn inspect(&mut self, input: &PhylorefInput) {
        for (index, specifier) in input.internal_specifiers.iter().enumerate() {
            self.resolver.inspect(SpecifierKind::Internal, index, specifier);
        }
        for (index, specifier) in input.external_specifiers.iter().enumerate() {
            self.resolver.inspect(SpecifierKind::External, index, specifier);
        }
    }

    pub fn into_warnings(self) -> Vec<SynthesisWarning> {
        self.resolver.into_warnings()
    }
}

/// `items` without the element at `index`, and that element.
pub(crate) fn split_off(items: &[Specifier], index: usize) -> (Vec<Specifier>, Specifier) {
    let mut rest = items.to_vec();
    let picked = rest.remove(index);
    (rest, picked)
}

/// `items` with `item` appended.
pub(crate) fn appended(items: &[Specifier], item: Specifier) -> Vec<Specifier> {
    let mut out = Vec::with_capacity(items.len() + 1);
    out.extend_from_slice(items);
    out.push(item);
    out
}
