//! # Simulation Crate
//!
//! The `sim` crate provides the core of the divergence simulator: alphabets
//! and sequences, the random mutation engine, the edit-distance engine, the
//! simulation driver and FASTA input/output.

pub mod alignment;
pub mod base;
pub mod errors;
pub mod evolution;
pub mod io;
pub mod prelude;
pub mod simulation;

pub use alignment::edit_distance;
pub use base::{Alphabet, Nucleotide, Sequence};
