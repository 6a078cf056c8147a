//! Clado Registry
//!
//! Memoized store of auxiliary classes. Within one phyloreference, every
//! distinct pair of specifier sets maps to at most one auxiliary class, so
//! shared sub-expressions are synthesized once and referenced by id.
//! A registry lives for exactly one synthesis run.

mod key;
mod registry;

pub use key::ClassKey;
pub use registry::{ClassRegistry, RegistryError, RegistryResult};
