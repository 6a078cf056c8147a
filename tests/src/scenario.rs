//! Scenario definition and builder.

use std::path::PathBuf;

use clado_compiler::{Outcome, SynthesisConfig, Synthesizer};
use clado_core::PhylorefInput;

use crate::assertion::{Assertion, AssertionBuilder};
use crate::error::{TestError, TestResult};
use crate::fixture::load_phyx;

/// A complete test scenario.
pub struct Scenario {
    /// Scenario name (for reporting).
    name: String,
    /// Inline input.
    input: Option<PhylorefInput>,
    /// Phyx fixture (relative to fixtures/) and phyloreference id.
    fixture: Option<(PathBuf, String)>,
    config: SynthesisConfig,
    assertion: Assertion,
}

impl Scenario {
    /// Create a new scenario with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            input: None,
            fixture: None,
            config: SynthesisConfig::default(),
            assertion: Assertion::new(),
        }
    }

    /// Synthesize this input.
    pub fn input(mut self, input: PhylorefInput) -> Self {
        self.input = Some(input);
        self
    }

    /// Synthesize the phyloreference `id` from a Phyx fixture.
    pub fn fixture(mut self, path: impl Into<PathBuf>, id: impl Into<String>) -> Self {
        self.fixture = Some((path.into(), id.into()));
        self
    }

    pub fn config(mut self, config: SynthesisConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the assertion the outcome must satisfy.
    pub fn expect<F>(mut self, assertion_fn: F) -> Self
    where
        F: FnOnce(AssertionBuilder) -> AssertionBuilder,
    {
        self.assertion = assertion_fn(AssertionBuilder::new()).build();
        self
    }

    /// Get the scenario name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Resolve the input, loading the fixture if needed.
    pub fn load_input(&self) -> TestResult<PhylorefInput> {
        if let Some(input) = &self.input {
            return Ok(input.clone());
        }
        let (path, id) = self
            .fixture
            .as_ref()
            .ok_or_else(|| TestError::missing_input(&self.name))?;
        load_phyx(path)?
            .into_iter()
            .find(|p| &p.id == id)
            .ok_or_else(|| TestError::phyloref_not_found(path, id))
    }

    /// Run the scenario, returning the verified outcome.
    pub fn run(&self) -> TestResult<Outcome> {
        let input = self.load_input()?;
        let outcome = Synthesizer::new(self.config).synthesize(&input)?;
        self.assertion.verify(&self.name, &outcome)?;
        Ok(outcome)
    }
}
