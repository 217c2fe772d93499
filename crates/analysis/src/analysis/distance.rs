//! Distance calculations for sequences
//!
//! Edit distances between every pair of a set of sequences. Both functions
//! use the full dynamic-programming distance from `twilight_sim`.

use rayon::prelude::*;
use twilight_sim::base::Sequence;

/// Calculate pairwise distances between all sequences
///
/// Returns the upper triangle in row order: `(0,1), (0,2), …, (1,2), …`,
/// `n·(n-1)/2` values for `n` sequences.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use twilight_analysis::distance::pairwise_distances;
/// use twilight_sim::base::Sequence;
///
/// let seqs = vec![
///     Sequence::from_str("ACGT").unwrap(),
///     Sequence::from_str("AGT").unwrap(),
///     Sequence::from_str("ACGT").unwrap(),
/// ];
/// assert_eq!(pairwise_distances(&seqs), vec![1, 0, 1]);
/// ```
pub fn pairwise_distances(sequences: &[Sequence]) -> Vec<usize> {
    let n = sequences.len();
    if n < 2 {
        return Vec::new();
    }

    (0..n - 1)
        .into_par_iter()
        .flat_map_iter(|i| {
            ((i + 1)..n).map(move |j| sequences[i].distance_to(&sequences[j]))
        })
        .collect()
}

/// Calculate full distance matrix
///
/// Returns an n×n symmetric matrix of edit distances with a zero diagonal.
pub fn distance_matrix(sequences: &[Sequence]) -> Vec<Vec<usize>> {
    let n = sequences.len();

    // Compute matrix in parallel by rows
    (0..n)
        .into_par_iter()
        .map(|i| {
            (0..n)
                .map(|j| {
                    if i == j {
                        0
                    } else {
                        // Always measure in the same orientation so the
                        // matrix is exactly symmetric
                        let (lo, hi) = if i < j { (i, j) } else { (j, i) };
                        sequences[lo].distance_to(&sequences[hi])
                    }
                })
                .collect()
        })
        .collect()
}
