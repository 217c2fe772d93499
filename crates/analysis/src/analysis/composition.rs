//! Sequence composition analysis
//!
//! Counting is case-insensitive; symbols outside `ACGT` still count toward
//! the sequence length.

use std::collections::HashMap;
use twilight_sim::base::Nucleotide;

/// Count each nucleotide in `seq`.
///
/// Only bases that occur are present in the map.
pub fn nucleotide_composition(seq: &[u8]) -> HashMap<Nucleotide, usize> {
    let mut counts = HashMap::new();
    for nuc in seq.iter().filter_map(|&b| Nucleotide::from_ascii(b)) {
        *counts.entry(nuc).or_insert(0) += 1;
    }
    counts
}

/// Fraction of G and C symbols, 0.0 to 1.0. Empty input gives 0.0.
pub fn gc_content(seq: &[u8]) -> f64 {
    if seq.is_empty() {
        return 0.0;
    }
    let gc = seq
        .iter()
        .filter(|&&b| matches!(b, b'G' | b'g' | b'C' | b'c'))
        .count();
    gc as f64 / seq.len() as f64
}

/// GC content as a percentage, `100 · (G + C) / len`.
pub fn gc_percent(seq: &[u8]) -> f64 {
    gc_content(seq) * 100.0
}
