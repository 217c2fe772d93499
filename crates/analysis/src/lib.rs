//! # Analysis Crate
//!
//! Statistics over simulated distances and sequence-level scans of real
//! genomes: pairwise edit distances, GC composition, complementary
//! palindromes and open reading frames.

pub mod analysis;

pub use analysis::*;
