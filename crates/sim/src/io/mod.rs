//! Sequence file input and output.

pub mod fasta;

pub use fasta::{parse_fasta, read_fasta, read_single_fasta, write_fasta, FastaRecord};
