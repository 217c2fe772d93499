//! Commonly used imports for convenience.
//!
//! # Example
//!
//! ```
//! use twilight_sim::prelude::*;
//! use std::str::FromStr;
//!
//! let a = Sequence::from_str("ACGT").unwrap();
//! let b = Sequence::from_str("AGT").unwrap();
//! assert_eq!(edit_distance(a.as_slice(), b.as_slice()), 1);
//! ```

pub use crate::alignment::{edit_distance, DistanceMatrix, EditOperation};
pub use crate::base::{Alphabet, Nucleotide, Sequence};
pub use crate::errors;
pub use crate::evolution::{
    apply_mutation, generate_random_sequence, mutate_n, MutationEvent, MutationKind,
};
pub use crate::io::FastaRecord;
pub use crate::simulation::{
    BaselineDistribution, DivergenceTrace, Simulation, SimulationBuilder, SimulationConfig,
    TwilightReport,
};
