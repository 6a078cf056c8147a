//! Clado Compiler
//!
//! Synthesize the class expressions a description-logic reasoner needs to
//! resolve a phyloreference on an arbitrary bifurcating tree.
//!
//! Responsibilities:
//! - Resolve specifiers into leaf restrictions
//! - Build the fixed-shape "includes" and two-unit MRCA expressions
//! - Enumerate every ordering of internal specifiers (MRCA alternatives)
//! - Layer exclusions for every ordering of external specifiers
//! - Extract shared sub-expressions into auxiliary classes
//! - Enforce the specifier-count admission bounds

mod config;
mod error;
mod external;
mod internal;
pub mod pair;
mod resolve;
mod synthesis;
mod synthesizer;
mod warning;

pub use config::{Rejection, SynthesisConfig};
pub use error::{SynthesisError, SynthesisResult};
pub use resolve::SpecifierResolver;
pub use synthesis::Synthesis;
pub use synthesizer::{synthesize, Outcome, Synthesizer};
pub use warning::SynthesisWarning;
