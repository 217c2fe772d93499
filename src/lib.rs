//! Twilight: simulate how random mutation erodes sequence similarity.
//!
//! A random origin sequence is mutated one uniform insertion, deletion or
//! substitution at a time, and its edit distance is tracked against the
//! origin (self-divergence) or against a sibling lineage (lineage
//! divergence). Comparing lineage divergence with the distance between
//! unrelated random sequences (the baseline) gives the "twilight zone": the
//! mutation count after which related sequences look unrelated.
//!
//! This crate re-exports the member crates:
//! - [`sim`]: alphabets, sequences, mutation and edit-distance engines,
//!   the simulation driver and FASTA I/O
//! - [`analysis`]: statistics, distance sets, GC composition, palindromes
//!   and ORFs
//!
//! ```
//! use twilight::prelude::*;
//!
//! let mut sim = SimulationBuilder::new()
//!     .sequence_length(40)
//!     .max_mutations(30)
//!     .baseline_pairs(50)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! let report = sim.twilight_zone();
//! assert_eq!(report.lineage.max_mutations(), 30);
//! ```

pub use twilight_analysis as analysis;
pub use twilight_sim as sim;

pub mod prelude;

pub use twilight_sim::alignment::edit_distance;
pub use twilight_sim::base::{Alphabet, Sequence};
pub use twilight_sim::evolution::{apply_mutation, generate_random_sequence};
pub use twilight_sim::simulation::{Simulation, SimulationBuilder, SimulationConfig};
