//! Shared default values for the command-line interface.
//! Simulation defaults live in `twilight_sim::simulation::configs`.

pub const OUTPUT_FORMAT: &str = "pretty";

pub const HISTOGRAM_BINS: usize = 20;
pub const HISTOGRAM_WIDTH: usize = 50;

/// Interval between rows of the trace table in pretty output.
pub const TRACE_STRIDE: usize = 10;

pub const PALINDROME_TOP: usize = 10;

pub const ORF_TOP: usize = 3;

/// FASTA line width used when writing sequences.
pub const FASTA_WIDTH: usize = 70;
