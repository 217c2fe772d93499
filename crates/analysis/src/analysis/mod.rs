//! Analysis tools for simulated and real sequences
//!
//! This module provides:
//! - Summary statistics and histograms
//! - Pairwise edit distances and distance matrices
//! - Sequence composition (GC content)
//! - Complementary palindromes
//! - Open reading frames ranked by GC content

pub mod composition;
pub mod distance;
pub mod orf;
pub mod palindrome;
pub mod utils;

// Re-export commonly used functions
pub use composition::{gc_content, gc_percent, nucleotide_composition};
pub use distance::{distance_matrix, pairwise_distances};
pub use orf::{find_orfs, rank_by_gc, Orf, Strand, DEFAULT_MIN_ORF_LENGTH};
pub use palindrome::{longest_complement_palindromes, Palindrome};
pub use utils::{histogram, mean, median, std_dev, HistogramBin};
