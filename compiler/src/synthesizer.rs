//! The orchestrator: synthesizes whole phyloreferences.

use crate::{Rejection, Synthesis, SynthesisConfig, SynthesisError, SynthesisResult, SynthesisWarning};
use clado_core::{Expression, Phyloreference, PhylorefInput};
use clado_registry::ClassRegistry;
use tracing::{debug, info, warn};

/// What became of one phyloreference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Expressions were synthesized.
    Synthesized {
        phyloref: Phyloreference,
        warnings: Vec<SynthesisWarning>,
    },
    /// No expressions could be synthesized; `phyloref.malformed` says why.
    Malformed {
        phyloref: Phyloreference,
        warnings: Vec<SynthesisWarning>,
    },
    /// Skipped by admission control.
    Rejected { id: String, rejection: Rejection },
}

impl Outcome {
    pub fn phyloref(&self) -> Option<&Phyloreference> {
        match self {
            Outcome::Synthesized { phyloref, .. } | Outcome::Malformed { phyloref, .. } => {
                Some(phyloref)
            }
            Outcome::Rejected { .. } => None,
        }
    }

    pub fn warnings(&self) -> &[SynthesisWarning] {
        match self {
            Outcome::Synthesized { warnings, .. } | Outcome::Malformed { warnings, .. } => {
                warnings.as_slice()
            }
            Outcome::Rejected { .. } => &[],
        }
    }

    pub fn is_synthesized(&self) -> bool {
        matches!(self, Outcome::Synthesized { .. })
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, Outcome::Malformed { .. })
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Outcome::Rejected { .. })
    }
}

/// The Synthesizer turns phyloreference inputs into class expressions.
#[derive(Debug, Clone, Default)]
pub struct Synthesizer {
    config: SynthesisConfig,
}

impl Synthesizer {
    pub fn new(config: SynthesisConfig) -> Self {
        Self { config }
    }

    /// Synthesize one phyloreference.
    ///
    /// Rejected and malformed phyloreferences are reported through the
    /// outcome; only contract violations are returned as errors.
    pub fn synthesize(&self, input: &PhylorefInput) -> SynthesisResult<Outcome> {
        if let Err(rejection) = self.config.admit(input) {
            warn!(id = %input.id, name = input.display_name(), %rejection, "phyloreference skipped");
            return Ok(Outcome::Rejected {
                id: input.id.clone(),
                rejection,
            });
        }

        let mut phyloref = Phyloreference::from_input(input);

        if input.internal_specifiers.is_empty() {
            let reason = if input.external_specifiers.is_empty() {
                "No specifiers provided"
            } else {
                "No internal specifiers provided"
            };
            warn!(id = %input.id, reason, "malformed phyloreference");
            phyloref.malformed = Some(reason.to_string());
            return Ok(Outcome::Malformed {
                phyloref,
                warnings: Vec::new(),
            });
        }

        let mut registry = ClassRegistry::new(&input.id);
        let mut synthesis = Synthesis::new(&input.internal_specifiers);
        synthesis.inspect(input);

        let result = synthesis.equivalent_class(&mut registry, input);
        let warnings = synthesis.into_warnings();

        let equivalent_class = match result {
            Ok(exprs) => exprs,
            Err(e) if e.is_contract_violation() => return Err(e),
            Err(e) => {
                warn!(id = %input.id, error = %e, "malformed phyloreference");
                phyloref.malformed = Some(e.to_string());
                return Ok(Outcome::Malformed { phyloref, warnings });
            }
        };

        phyloref.equivalent_class = equivalent_class;
        phyloref.auxiliary_classes = registry.into_classes();

        if let Some(id) = phyloref.dangling_references().into_iter().next() {
            return Err(SynthesisError::DanglingReference {
                owner: input.id.clone(),
                id: id.to_string(),
            });
        }

        debug!(
            id = %input.id,
            expressions = phyloref.equivalent_class.len(),
            auxiliary_classes = phyloref.auxiliary_classes.len(),
            "synthesized phyloreference"
        );
        Ok(Outcome::Synthesized { phyloref, warnings })
    }

    /// Synthesize a batch. Rejected and malformed entries do not stop the
    /// batch; a contract violation does.
    pub fn synthesize_all(&self, inputs: &[PhylorefInput]) -> SynthesisResult<Vec<Outcome>> {
        let outcomes = inputs
            .iter()
            .map(|input| self.synthesize(input))
            .collect::<SynthesisResult<Vec<_>>>()?;

        info!(
            total = outcomes.len(),
            synthesized = outcomes.iter().filter(|o| o.is_synthesized()).count(),
            malformed = outcomes.iter().filter(|o| o.is_malformed()).count(),
            rejected = outcomes.iter().filter(|o| o.is_rejected()).count(),
            "synthesized batch"
        );
        Ok(outcomes)
    }
}

impl<'a> Synthesis<'a> {
    /// The complete alternative-expression set for `input`.
    pub(crate) fn equivalent_class(
        &mut self,
        registry: &mut ClassRegistry,
        input: &PhylorefInput,
    ) -> SynthesisResult<Vec<Expression>> {
        let internals = &input.internal_specifiers;
        let externals = &input.external_specifiers;

        let internal_exprs = match internals.as_slice() {
            [only] => vec![self.includes(only)],
            _ => self.expressions_for_internals(registry, internals, &[])?,
        };

        if externals.is_empty() {
            return Ok(internal_exprs);
        }

        let mut exprs = Vec::new();
        for accumulated in &internal_exprs {
            exprs.extend(self.expressions_for_externals(registry, accumulated, externals, &[])?);
        }
        Ok(exprs)
    }
}

/// Synthesize one phyloreference with the default configuration.
pub fn synthesize(input: &PhylorefInput) -> SynthesisResult<Outcome> {
    Synthesizer::default().synthesize(input)
}
