//! Base types for sequence representation.
//!
//! This module provides the foundational types for representing alphabets,
//! symbol sequences and DNA nucleotides.

mod alphabet;
mod nucleotide;
mod sequence;

pub use alphabet::{Alphabet, DEFAULT_SYMBOLS};
pub use nucleotide::{reverse_complement, Nucleotide};
pub use sequence::Sequence;
