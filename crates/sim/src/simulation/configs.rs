//! Simulation configuration.
//!
//! A `SimulationConfig` can be written to and read back from JSON to fully
//! reproduce a run. Missing fields in a file fall back to their defaults.

use crate::base::Alphabet;
use crate::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default length of every generated sequence.
pub const DEFAULT_SEQUENCE_LENGTH: usize = 200;
/// Default number of mutation steps traced by the divergence experiments.
pub const DEFAULT_MAX_MUTATIONS: usize = 300;
/// Default number of random pairs sampled for the baseline distribution.
pub const DEFAULT_BASELINE_PAIRS: usize = 10_000;

/// Parameters shared by every experiment of a simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Symbols sequences are drawn from
    pub alphabet: Alphabet,
    /// Length of the origin sequence and of baseline sequences
    pub sequence_length: usize,
    /// Largest mutation count M traced
    pub max_mutations: usize,
    /// Number of independent random pairs in the baseline
    pub baseline_pairs: usize,
    /// Optional RNG seed for reproducibility
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            alphabet: Alphabet::default(),
            sequence_length: DEFAULT_SEQUENCE_LENGTH,
            max_mutations: DEFAULT_MAX_MUTATIONS,
            baseline_pairs: DEFAULT_BASELINE_PAIRS,
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Check that the configuration can be run.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidParameter`] for a zero sequence length or
    /// a zero baseline sample size.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sequence_length == 0 {
            return Err(ConfigError::InvalidParameter(
                "sequence_length must be > 0".to_string(),
            ));
        }
        if self.baseline_pairs == 0 {
            return Err(ConfigError::InvalidParameter(
                "baseline_pairs must be > 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Load and validate a configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path.as_ref())?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Pretty-printed JSON representation.
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_json_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        fs::write(path.as_ref(), self.to_json_string()?)?;
        Ok(())
    }
}
