//! Clado Core Types
//!
//! This crate provides the foundational types used throughout Clado:
//! - Taxonomic units (scientific names and specimens) and their identities
//! - Specifiers (internal and external references to taxonomic units)
//! - Class expressions (restrictions, intersections, class references)
//! - Auxiliary classes and synthesized phyloreferences
//! - The OWL vocabulary used on the wire

mod class;
mod expression;
mod id;
mod phyloref;
mod specifier;
mod taxon;
pub mod vocab;

pub use class::*;
pub use expression::*;
pub use id::*;
pub use phyloref::*;
pub use specifier::*;
pub use taxon::*;
