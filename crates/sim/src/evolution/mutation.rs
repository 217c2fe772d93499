//! Random sequence generation and single-step mutation.
//!
//! One mutation step picks a kind uniformly from insertion, deletion and
//! substitution, then a position and (where needed) a symbol:
//!
//! ## Insertion
//! A slot is drawn uniformly from the `N + 1` gaps of a length-`N` sequence
//! (before the first symbol, between any two, after the last) and a symbol
//! uniformly from the whole alphabet. The sequence grows by one.
//!
//! ## Deletion
//! A position is drawn uniformly from `0..N` and removed. On an empty
//! sequence this is a no-op.
//!
//! ## Substitution
//! A position is drawn uniformly from `0..N` and its symbol replaced by one
//! drawn uniformly from the alphabet minus the current symbol, so the symbol
//! always changes. On an empty sequence, or when the alphabet has a single
//! symbol, this is a no-op.
//!
//! Every kind is chosen with probability 1/3 regardless of the sequence
//! length, so no-op steps still count as a mutation step for the caller.

use crate::base::{Alphabet, Sequence};
use crate::errors::OutOfBounds;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of a single edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MutationKind {
    Insertion,
    Deletion,
    Substitution,
}

impl MutationKind {
    pub const ALL: [MutationKind; 3] = [Self::Insertion, Self::Deletion, Self::Substitution];

    /// Draw a kind with probability 1/3 each.
    #[inline]
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

impl fmt::Display for MutationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Insertion => "insertion",
            Self::Deletion => "deletion",
            Self::Substitution => "substitution",
        };
        f.write_str(name)
    }
}

/// A concrete edit drawn for a particular sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MutationEvent {
    /// Insert `symbol` before `position` (`position == len` appends).
    Insertion { position: usize, symbol: u8 },
    Deletion { position: usize },
    Substitution { position: usize, symbol: u8 },
}

impl MutationEvent {
    pub fn kind(&self) -> MutationKind {
        match self {
            Self::Insertion { .. } => MutationKind::Insertion,
            Self::Deletion { .. } => MutationKind::Deletion,
            Self::Substitution { .. } => MutationKind::Substitution,
        }
    }

    pub fn position(&self) -> usize {
        match *self {
            Self::Insertion { position, .. }
            | Self::Deletion { position }
            | Self::Substitution { position, .. } => position,
        }
    }

    /// Apply the event to a copy of `sequence`.
    ///
    /// # Errors
    /// Returns [`OutOfBounds`] if the position does not fit `sequence`.
    pub fn apply(&self, sequence: &Sequence) -> Result<Sequence, OutOfBounds> {
        let mut out = sequence.clone();
        self.apply_in_place(&mut out)?;
        Ok(out)
    }

    /// Apply the event to `sequence` directly. On error the sequence is
    /// left unchanged.
    pub fn apply_in_place(&self, sequence: &mut Sequence) -> Result<(), OutOfBounds> {
        match *self {
            Self::Insertion { position, symbol } => sequence.insert(position, symbol),
            Self::Deletion { position } => sequence.remove(position).map(|_| ()),
            Self::Substitution { position, symbol } => sequence.set(position, symbol),
        }
    }
}

/// Generate a sequence of `length` symbols drawn independently and uniformly
/// from `alphabet`.
///
/// ```
/// use rand::SeedableRng;
/// use rand_xoshiro::Xoshiro256PlusPlus;
/// use twilight_sim::base::Alphabet;
/// use twilight_sim::evolution::generate_random_sequence;
///
/// let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);
/// let seq = generate_random_sequence(50, &Alphabet::dna(), &mut rng);
/// assert_eq!(seq.len(), 50);
/// ```
pub fn generate_random_sequence<R: Rng + ?Sized>(
    length: usize,
    alphabet: &Alphabet,
    rng: &mut R,
) -> Sequence {
    let symbols = alphabet.symbols();
    (0..length)
        .map(|_| symbols[rng.random_range(0..symbols.len())])
        .collect()
}

/// Draw one mutation event for `sequence` without applying it.
///
/// Returns `None` when the drawn kind is a no-op for this input (deletion or
/// substitution on an empty sequence, substitution over a one-symbol
/// alphabet).
pub fn sample_mutation<R: Rng + ?Sized>(
    sequence: &Sequence,
    alphabet: &Alphabet,
    rng: &mut R,
) -> Option<MutationEvent> {
    let kind = MutationKind::random(rng);
    sample_mutation_of_kind(kind, sequence, alphabet, rng)
}

/// Draw an event of the given `kind` for `sequence`.
pub fn sample_mutation_of_kind<R: Rng + ?Sized>(
    kind: MutationKind,
    sequence: &Sequence,
    alphabet: &Alphabet,
    rng: &mut R,
) -> Option<MutationEvent> {
    let len = sequence.len();
    let symbols = alphabet.symbols();
    match kind {
        MutationKind::Insertion => {
            let position = rng.random_range(0..=len);
            let symbol = symbols[rng.random_range(0..symbols.len())];
            Some(MutationEvent::Insertion { position, symbol })
        }
        MutationKind::Deletion => {
            if len == 0 {
                return None;
            }
            Some(MutationEvent::Deletion {
                position: rng.random_range(0..len),
            })
        }
        MutationKind::Substitution => {
            if len == 0 || symbols.len() < 2 {
                return None;
            }
            let position = rng.random_range(0..len);
            let symbol = match sequence.get(position).and_then(|s| alphabet.index_of(s)) {
                // Draw from the other `k - 1` symbols by skipping over the current index
                Some(current) => {
                    let r = rng.random_range(0..symbols.len() - 1);
                    symbols[if r >= current { r + 1 } else { r }]
                }
                // Foreign symbol: every alphabet symbol differs from it
                None => symbols[rng.random_range(0..symbols.len())],
            };
            Some(MutationEvent::Substitution { position, symbol })
        }
    }
}

/// Return a copy of `sequence` with one random mutation applied.
///
/// The input is never modified. Deletion or substitution on an empty
/// sequence yields an empty sequence.
pub fn apply_mutation<R: Rng + ?Sized>(
    sequence: &Sequence,
    alphabet: &Alphabet,
    rng: &mut R,
) -> Sequence {
    let kind = MutationKind::random(rng);
    apply_mutation_of_kind(kind, sequence, alphabet, rng)
}

/// Like [`apply_mutation`] but with the kind fixed by the caller.
pub fn apply_mutation_of_kind<R: Rng + ?Sized>(
    kind: MutationKind,
    sequence: &Sequence,
    alphabet: &Alphabet,
    rng: &mut R,
) -> Sequence {
    let mut out = sequence.clone();
    mutate_in_place(kind, &mut out, alphabet, rng);
    out
}

/// Apply `steps` successive random mutations, returning the final sequence.
pub fn mutate_n<R: Rng + ?Sized>(
    sequence: &Sequence,
    alphabet: &Alphabet,
    steps: usize,
    rng: &mut R,
) -> Sequence {
    let mut current = sequence.clone();
    for _ in 0..steps {
        let kind = MutationKind::random(rng);
        mutate_in_place(kind, &mut current, alphabet, rng);
    }
    current
}

/// One mutation of `kind` applied to `sequence` in place; returns the event
/// that was applied, if any.
pub(crate) fn mutate_in_place<R: Rng + ?Sized>(
    kind: MutationKind,
    sequence: &mut Sequence,
    alphabet: &Alphabet,
    rng: &mut R,
) -> Option<MutationEvent> {
    let event = sample_mutation_of_kind(kind, sequence, alphabet, rng)?;
    // Sampled positions are always within bounds for `sequence`
    event.apply_in_place(sequence).ok()?;
    Some(event)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;
    use std::collections::HashMap;
    use std::str::FromStr;

    fn rng(seed: u64) -> Xoshiro256PlusPlus {
        Xoshiro256PlusPlus::seed_from_u64(seed)
    }

    #[test]
    fn test_generate_random_sequence_length_and_symbols() {
        let alphabet = Alphabet::extended();
        let mut rng = rng(1);
        let seq = generate_random_sequence(200, &alphabet, &mut rng);
        assert_eq!(seq.len(), 200);
        assert!(seq.is_over(&alphabet));
    }

    #[test]
    fn test_generate_random_sequence_zero_length() {
        let mut rng = rng(2);
        let seq = generate_random_sequence(0, &Alphabet::dna(), &mut rng);
        assert!(seq.is_empty());
    }

    #[test]
    fn test_generate_random_sequence_singleton_alphabet() {
        let alphabet = Alphabet::new("A").unwrap();
        let mut rng = rng(3);
        let seq = generate_random_sequence(10, &alphabet, &mut rng);
        assert_eq!(seq.to_string(), "AAAAAAAAAA");
    }

    #[test]
    fn test_generate_random_sequence_uses_all_symbols() {
        let alphabet = Alphabet::extended();
        let mut rng = rng(4);
        let seq = generate_random_sequence(6000, &alphabet, &mut rng);
        let mut counts: HashMap<u8, usize> = HashMap::new();
        for &s in seq.as_slice() {
            *counts.entry(s).or_default() += 1;
        }
        assert_eq!(counts.len(), 6);
        for &count in counts.values() {
            // Expected 1000 per symbol
            assert!((800..1200).contains(&count), "count {count}");
        }
    }

    #[test]
    fn test_generate_random_sequence_deterministic() {
        let alphabet = Alphabet::extended();
        let a = generate_random_sequence(100, &alphabet, &mut rng(42));
        let b = generate_random_sequence(100, &alphabet, &mut rng(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_apply_mutation_changes_length_by_at_most_one() {
        let alphabet = Alphabet::extended();
        let mut rng = rng(5);
        let mut seq = generate_random_sequence(50, &alphabet, &mut rng);
        for _ in 0..500 {
            let next = apply_mutation(&seq, &alphabet, &mut rng);
            assert!(next.len().abs_diff(seq.len()) <= 1);
            assert!(next.is_over(&alphabet));
            assert!(seq.distance_to(&next) <= 1);
            seq = next;
        }
    }

    #[test]
    fn test_apply_mutation_leaves_input_untouched() {
        let alphabet = Alphabet::dna();
        let seq = Sequence::from_str("ACGTACGT").unwrap();
        let before = seq.clone();
        let mut rng = rng(6);
        for _ in 0..50 {
            let _ = apply_mutation(&seq, &alphabet, &mut rng);
        }
        assert_eq!(seq, before);
    }

    #[test]
    fn test_insertion_grows_by_one() {
        let alphabet = Alphabet::dna();
        let seq = Sequence::from_str("ACGT").unwrap();
        let mut rng = rng(7);
        for _ in 0..100 {
            let next = apply_mutation_of_kind(MutationKind::Insertion, &seq, &alphabet, &mut rng);
            assert_eq!(next.len(), 5);
            assert_eq!(seq.distance_to(&next), 1);
        }
    }

    #[test]
    fn test_insertion_reaches_every_slot() {
        let alphabet = Alphabet::new("X").unwrap();
        let seq = Sequence::from_str("AB").unwrap();
        let mut rng = rng(8);
        let mut seen = [false; 3];
        for _ in 0..200 {
            if let Some(MutationEvent::Insertion { position, symbol }) =
                sample_mutation_of_kind(MutationKind::Insertion, &seq, &alphabet, &mut rng)
            {
                assert_eq!(symbol, b'X');
                seen[position] = true;
            }
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_insertion_into_empty() {
        let alphabet = Alphabet::dna();
        let mut rng = rng(9);
        let next =
            apply_mutation_of_kind(MutationKind::Insertion, &Sequence::new(), &alphabet, &mut rng);
        assert_eq!(next.len(), 1);
        assert!(next.is_over(&alphabet));
    }

    #[test]
    fn test_deletion_shrinks_by_one() {
        let alphabet = Alphabet::dna();
        let seq = Sequence::from_str("ACGT").unwrap();
        let mut rng = rng(10);
        for _ in 0..100 {
            let next = apply_mutation_of_kind(MutationKind::Deletion, &seq, &alphabet, &mut rng);
            assert_eq!(next.len(), 3);
        }
    }

    #[test]
    fn test_substitution_always_changes_symbol() {
        let alphabet = Alphabet::extended();
        let seq = Sequence::from_str("ACGTBD").unwrap();
        let mut rng = rng(11);
        for _ in 0..500 {
            let next =
                apply_mutation_of_kind(MutationKind::Substitution, &seq, &alphabet, &mut rng);
            assert_eq!(next.len(), seq.len());
            let diffs = seq
                .as_slice()
                .iter()
                .zip(next.as_slice())
                .filter(|(a, b)| a != b)
                .count();
            assert_eq!(diffs, 1);
            assert!(next.is_over(&alphabet));
        }
    }

    #[test]
    fn test_substitution_covers_other_symbols() {
        let alphabet = Alphabet::dna();
        let seq = Sequence::from_str("A").unwrap();
        let mut rng = rng(12);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..300 {
            let next =
                apply_mutation_of_kind(MutationKind::Substitution, &seq, &alphabet, &mut rng);
            seen.insert(next.as_slice()[0]);
        }
        assert_eq!(seen.len(), 3);
        assert!(!seen.contains(&b'A'));
    }

    #[test]
    fn test_substitution_of_foreign_symbol() {
        let alphabet = Alphabet::dna();
        let seq = Sequence::from_str("N").unwrap();
        let mut rng = rng(13);
        let next = apply_mutation_of_kind(MutationKind::Substitution, &seq, &alphabet, &mut rng);
        assert!(next.is_over(&alphabet));
    }

    #[test]
    fn test_substitution_singleton_alphabet_is_noop() {
        let alphabet = Alphabet::new("A").unwrap();
        let seq = Sequence::from_str("AAA").unwrap();
        let mut rng = rng(14);
        assert_eq!(
            sample_mutation_of_kind(MutationKind::Substitution, &seq, &alphabet, &mut rng),
            None
        );
        let next = apply_mutation_of_kind(MutationKind::Substitution, &seq, &alphabet, &mut rng);
        assert_eq!(next, seq);
    }

    #[test]
    fn test_empty_sequence_noops() {
        let alphabet = Alphabet::dna();
        let empty = Sequence::new();
        let mut rng = rng(15);
        for kind in [MutationKind::Deletion, MutationKind::Substitution] {
            assert_eq!(
                sample_mutation_of_kind(kind, &empty, &alphabet, &mut rng),
                None
            );
            assert!(apply_mutation_of_kind(kind, &empty, &alphabet, &mut rng).is_empty());
        }
    }

    #[test]
    fn test_kinds_are_equiprobable() {
        let mut rng = rng(16);
        let mut counts: HashMap<MutationKind, usize> = HashMap::new();
        for _ in 0..3000 {
            *counts.entry(MutationKind::random(&mut rng)).or_default() += 1;
        }
        for kind in MutationKind::ALL {
            let count = counts[&kind];
            assert!((850..1150).contains(&count), "{kind}: {count}");
        }
    }

    #[test]
    fn test_event_apply() {
        let seq = Sequence::from_str("ACG").unwrap();
        let ins = MutationEvent::Insertion {
            position: 3,
            symbol: b'T',
        };
        assert_eq!(ins.apply(&seq).unwrap().to_string(), "ACGT");
        assert_eq!(ins.kind(), MutationKind::Insertion);

        let del = MutationEvent::Deletion { position: 0 };
        assert_eq!(del.apply(&seq).unwrap().to_string(), "CG");

        let sub = MutationEvent::Substitution {
            position: 1,
            symbol: b'T',
        };
        assert_eq!(sub.apply(&seq).unwrap().to_string(), "ATG");
        assert_eq!(sub.position(), 1);
    }

    #[test]
    fn test_event_apply_out_of_bounds() {
        let mut seq = Sequence::from_str("AC").unwrap();
        let del = MutationEvent::Deletion { position: 2 };
        assert_eq!(
            del.apply_in_place(&mut seq),
            Err(OutOfBounds { index: 2, len: 2 })
        );
        let ins = MutationEvent::Insertion {
            position: 3,
            symbol: b'A',
        };
        assert!(ins.apply(&seq).is_err());
        assert_eq!(seq.to_string(), "AC");
    }

    #[test]
    fn test_mutate_n_deterministic() {
        let alphabet = Alphabet::extended();
        let origin = generate_random_sequence(100, &alphabet, &mut rng(17));
        let a = mutate_n(&origin, &alphabet, 50, &mut rng(18));
        let b = mutate_n(&origin, &alphabet, 50, &mut rng(18));
        assert_eq!(a, b);
        assert!(origin.distance_to(&a) <= 50);
        assert!(a.len().abs_diff(origin.len()) <= 50);
    }

    #[test]
    fn test_mutate_n_zero_steps() {
        let alphabet = Alphabet::dna();
        let origin = Sequence::from_str("ACGT").unwrap();
        assert_eq!(mutate_n(&origin, &alphabet, 0, &mut rng(19)), origin);
    }

    #[test]
    fn test_mutation_kind_serde() {
        let json = serde_json::to_string(&MutationKind::Substitution).unwrap();
        assert_eq!(json, "\"substitution\"");
    }
}
