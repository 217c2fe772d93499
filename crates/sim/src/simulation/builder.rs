//! Builder pattern for creating simulations.
//!
//! Provides a fluent API for configuring and creating simulations with
//! sensible defaults and validation.

use crate::base::Alphabet;
pub use crate::errors::BuilderError;
use crate::simulation::{Simulation, SimulationConfig};

/// Builder for constructing Simulation instances with a fluent API.
///
/// Every parameter has a default (see [`SimulationConfig::default`]).
///
/// # Examples
///
/// ```
/// use twilight_sim::simulation::SimulationBuilder;
///
/// let mut sim = SimulationBuilder::new()
///     .alphabet_symbols("ACGT")
///     .sequence_length(50)
///     .max_mutations(20)
///     .baseline_pairs(100)
///     .seed(42)
///     .build()
///     .unwrap();
///
/// let trace = sim.self_divergence();
/// assert_eq!(trace.max_mutations(), 20);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SimulationBuilder {
    config: SimulationConfig,
    // Raw symbols, validated in `build`
    alphabet_symbols: Option<String>,
}

impl SimulationBuilder {
    /// Create a new simulation builder with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration.
    pub fn from_config(config: SimulationConfig) -> Self {
        Self {
            config,
            alphabet_symbols: None,
        }
    }

    pub fn alphabet(mut self, alphabet: Alphabet) -> Self {
        self.config.alphabet = alphabet;
        self.alphabet_symbols = None;
        self
    }

    /// Set the alphabet from its symbols; validated when building.
    pub fn alphabet_symbols(mut self, symbols: impl Into<String>) -> Self {
        self.alphabet_symbols = Some(symbols.into());
        self
    }

    pub fn sequence_length(mut self, length: usize) -> Self {
        self.config.sequence_length = length;
        self
    }

    pub fn max_mutations(mut self, max: usize) -> Self {
        self.config.max_mutations = max;
        self
    }

    pub fn baseline_pairs(mut self, pairs: usize) -> Self {
        self.config.baseline_pairs = pairs;
        self
    }

    /// Set random seed for reproducibility.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Assemble and validate the configuration without creating a simulation.
    pub fn build_config(self) -> Result<SimulationConfig, BuilderError> {
        let mut config = self.config;
        if let Some(symbols) = self.alphabet_symbols {
            config.alphabet = Alphabet::new(&symbols)?;
        }
        config.validate()?;
        Ok(config)
    }

    /// Build the simulation.
    ///
    /// # Errors
    /// Returns an error if the alphabet is invalid or the configuration
    /// fails validation.
    pub fn build(self) -> Result<Simulation, BuilderError> {
        let config = self.build_config()?;
        Ok(Simulation::new(config)?)
    }
}
