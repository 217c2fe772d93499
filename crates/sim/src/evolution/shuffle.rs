//! Uniform permutation of a sequence.

use crate::base::Sequence;
use rand::seq::SliceRandom;
use rand::Rng;

/// Return a uniformly shuffled copy of `sequence`.
///
/// The result has the same length and the same symbol composition as the
/// input; only the order changes.
pub fn shuffle_sequence<R: Rng + ?Sized>(sequence: &Sequence, rng: &mut R) -> Sequence {
    let mut out = sequence.clone();
    out.as_mut_slice().shuffle(rng);
    out
}
