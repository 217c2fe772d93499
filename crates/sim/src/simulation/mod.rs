//! Simulation driver for the divergence experiments.
//!
//! - `Simulation`: owns a configuration and a seeded RNG and runs the
//!   self-divergence, lineage-divergence, baseline and twilight-zone
//!   experiments.
//! - `SimulationConfig`: serialisable parameters shared by every experiment.
//! - `SimulationBuilder`: fluent builder with validation.

pub mod builder;
pub mod configs;
pub mod engine;
pub mod results;

pub use builder::SimulationBuilder;
pub use configs::{
    SimulationConfig, DEFAULT_BASELINE_PAIRS, DEFAULT_MAX_MUTATIONS, DEFAULT_SEQUENCE_LENGTH,
};
pub use engine::Simulation;
pub use results::{BaselineDistribution, DivergenceTrace, TwilightReport};
