//! Fixed-shape expressions over one or two leaf restrictions.

use clado_core::{Expression, Property};

/// `includes_TU some leaf`
pub fn includes(leaf: Expression) -> Expression {
    Expression::some(Property::IncludesTu, leaf)
}

/// `excludes_TU some leaf`
pub fn excludes(leaf: Expression) -> Expression {
    Expression::some(Property::ExcludesTu, leaf)
}

/// The most recent common ancestor of two units.
///
/// `has_Child some (excludes_TU some a and includes_TU some b)`: a node with
/// a child that contains `b` but not `a`, whose other lineage must therefore
/// lead to `a`. The result is asymmetric in its arguments.
pub fn mrca_of_two(a: Expression, b: Expression) -> Expression {
    Expression::some(
        Property::HasChild,
        Expression::and(vec![excludes(a), includes(b)]),
    )
}
