//! Unit-cost edit distance (Levenshtein) by dynamic programming.
//!
//! The table `D` has `m + 1` rows and `n + 1` columns for inputs of length
//! `m` and `n`. `D[i][j]` is the minimum number of insertions, deletions and
//! substitutions turning the first `i` symbols of `a` into the first `j`
//! symbols of `b`:
//!
//! - `D[i][0] = i`, `D[0][j] = j`
//! - `D[i][j] = min(D[i-1][j] + 1, D[i][j-1] + 1, D[i-1][j-1] + [a[i-1] != b[j-1]])`
//!
//! The whole table is always filled; there is no banding or early exit.
//!
//! ## Complexity
//!
//! For lengths $m$ and $n$: time $O(mn)$, space $O(mn)$.

use serde::{Deserialize, Serialize};

/// Full `(m + 1) × (n + 1)` edit-distance table, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMatrix {
    rows: usize,
    cols: usize,
    cells: Vec<usize>,
}

impl DistanceMatrix {
    /// Fill the table for `a` (rows) against `b` (columns).
    pub fn compute<T: PartialEq>(a: &[T], b: &[T]) -> Self {
        let rows = a.len() + 1;
        let cols = b.len() + 1;
        let mut cells = vec![0usize; rows * cols];

        for (i, cell) in cells.iter_mut().step_by(cols).enumerate() {
            *cell = i;
        }
        for (j, cell) in cells[..cols].iter_mut().enumerate() {
            *cell = j;
        }

        for i in 1..rows {
            let (prev, cur) = cells[(i - 1) * cols..(i + 1) * cols].split_at_mut(cols);
            let a_sym = &a[i - 1];
            for j in 1..cols {
                let cost = usize::from(*a_sym != b[j - 1]);
                let deletion = prev[j] + 1;
                let insertion = cur[j - 1] + 1;
                let substitution = prev[j - 1] + cost;
                cur[j] = deletion.min(insertion).min(substitution);
            }
        }

        Self { rows, cols, cells }
    }

    /// Number of rows, `len(a) + 1`.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns, `len(b) + 1`.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Entry `D[i][j]`, or `None` outside the table.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Option<usize> {
        if i < self.rows && j < self.cols {
            Some(self.cells[i * self.cols + j])
        } else {
            None
        }
    }

    #[inline]
    fn at(&self, i: usize, j: usize) -> usize {
        self.cells[i * self.cols + j]
    }

    /// The edit distance, `D[m][n]`.
    #[inline]
    pub fn distance(&self) -> usize {
        self.at(self.rows - 1, self.cols - 1)
    }

    /// Walk back from `D[m][n]` to `D[0][0]` producing one optimal script.
    ///
    /// Ties prefer the diagonal move, then deletion, then insertion.
    ///
    /// # Panics
    /// Panics if `a` and `b` are not the inputs the table was computed from
    /// (their lengths must be `rows - 1` and `cols - 1`).
    pub fn traceback<T: PartialEq>(&self, a: &[T], b: &[T]) -> Vec<EditOperation> {
        assert!(
            a.len() + 1 == self.rows && b.len() + 1 == self.cols,
            "traceback inputs do not match a {}x{} table",
            self.rows,
            self.cols
        );
        let mut ops = Vec::with_capacity(self.rows.max(self.cols));
        let (mut i, mut j) = (a.len(), b.len());

        while i > 0 || j > 0 {
            if i > 0 && j > 0 {
                let matched = a[i - 1] == b[j - 1];
                let cost = usize::from(!matched);
                if self.at(i, j) == self.at(i - 1, j - 1) + cost {
                    ops.push(if matched {
                        EditOperation::Match { a: i - 1, b: j - 1 }
                    } else {
                        EditOperation::Substitution { a: i - 1, b: j - 1 }
                    });
                    i -= 1;
                    j -= 1;
                    continue;
                }
            }
            if i > 0 && self.at(i, j) == self.at(i - 1, j) + 1 {
                ops.push(EditOperation::Deletion { a: i - 1 });
                i -= 1;
            } else {
                ops.push(EditOperation::Insertion { b: j - 1 });
                j -= 1;
            }
        }

        ops.reverse();
        ops
    }
}

/// One column of an edit script turning `a` into `b`.
///
/// Positions are 0-based indices into `a` and `b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditOperation {
    Match { a: usize, b: usize },
    Substitution { a: usize, b: usize },
    /// `a[a]` is removed.
    Deletion { a: usize },
    /// `b[b]` is inserted.
    Insertion { b: usize },
}

impl EditOperation {
    /// Unit cost of the operation (0 for a match, 1 otherwise).
    #[inline]
    pub fn cost(&self) -> usize {
        match self {
            Self::Match { .. } => 0,
            _ => 1,
        }
    }
}

/// Counts of each operation kind in an edit script.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditSummary {
    pub matches: usize,
    pub substitutions: usize,
    pub insertions: usize,
    pub deletions: usize,
}

impl EditSummary {
    pub fn from_operations(ops: &[EditOperation]) -> Self {
        ops.iter().fold(Self::default(), |mut acc, op| {
            match op {
                EditOperation::Match { .. } => acc.matches += 1,
                EditOperation::Substitution { .. } => acc.substitutions += 1,
                EditOperation::Insertion { .. } => acc.insertions += 1,
                EditOperation::Deletion { .. } => acc.deletions += 1,
            }
            acc
        })
    }

    /// Total number of edits (everything except matches).
    #[inline]
    pub fn edits(&self) -> usize {
        self.substitutions + self.insertions + self.deletions
    }
}

/// Distance together with one optimal edit script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alignment {
    pub distance: usize,
    pub operations: Vec<EditOperation>,
}

impl Alignment {
    pub fn summary(&self) -> EditSummary {
        EditSummary::from_operations(&self.operations)
    }
}

/// Minimum number of unit-cost insertions, deletions and substitutions
/// needed to turn `a` into `b`.
///
/// Accepts any pair of inputs, including empty ones.
///
/// ```
/// use twilight_sim::alignment::edit_distance;
///
/// assert_eq!(edit_distance(b"ACGT", b"AGT"), 1);
/// assert_eq!(edit_distance(b"", b"ACG"), 3);
/// assert_eq!(edit_distance::<u8>(&[], &[]), 0);
/// ```
#[must_use]
pub fn edit_distance<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    DistanceMatrix::compute(a, b).distance()
}

/// Edit distance plus the traceback of one optimal script.
#[must_use]
pub fn align<T: PartialEq>(a: &[T], b: &[T]) -> Alignment {
    let matrix = DistanceMatrix::compute(a, b);
    Alignment {
        distance: matrix.distance(),
        operations: matrix.traceback(a, b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_xoshiro::Xoshiro256PlusPlus;

    fn random_bytes(rng: &mut Xoshiro256PlusPlus, max_len: usize) -> Vec<u8> {
        let len = rng.random_range(0..=max_len);
        (0..len).map(|_| b"ACGT"[rng.random_range(0..4)]).collect()
    }

    #[test]
    fn test_known_distances() {
        assert_eq!(edit_distance(b"ACGT", b"AGT"), 1);
        assert_eq!(edit_distance(b"", b"ACG"), 3);
        assert_eq!(edit_distance(b"ACG", b""), 3);
        assert_eq!(edit_distance(b"kitten", b"sitting"), 3);
        assert_eq!(edit_distance(b"AAAA", b"TTTT"), 4);
        assert_eq!(edit_distance(b"ACGT", b"TGCA"), 4);
    }

    #[test]
    fn test_both_empty() {
        let empty: [u8; 0] = [];
        assert_eq!(edit_distance(&empty, &empty), 0);
        let matrix = DistanceMatrix::compute(&empty, &empty);
        assert_eq!(matrix.rows(), 1);
        assert_eq!(matrix.cols(), 1);
        assert_eq!(matrix.get(0, 0), Some(0));
    }

    #[test]
    fn test_matrix_base_cases() {
        let matrix = DistanceMatrix::compute(b"ACG", b"TT");
        assert_eq!(matrix.rows(), 4);
        assert_eq!(matrix.cols(), 3);
        for i in 0..4 {
            assert_eq!(matrix.get(i, 0), Some(i));
        }
        for j in 0..3 {
            assert_eq!(matrix.get(0, j), Some(j));
        }
        assert_eq!(matrix.get(4, 0), None);
        assert_eq!(matrix.get(0, 3), None);
    }

    #[test]
    fn test_matrix_recurrence_holds() {
        let a = b"GATTACA";
        let b = b"GCATGCU";
        let matrix = DistanceMatrix::compute(a, b);
        for i in 1..matrix.rows() {
            for j in 1..matrix.cols() {
                let cost = usize::from(a[i - 1] != b[j - 1]);
                let expected = (matrix.get(i - 1, j).unwrap() + 1)
                    .min(matrix.get(i, j - 1).unwrap() + 1)
                    .min(matrix.get(i - 1, j - 1).unwrap() + cost);
                assert_eq!(matrix.get(i, j), Some(expected));
            }
        }
        assert_eq!(matrix.distance(), 4);
    }

    #[test]
    fn test_generic_symbols() {
        let a = ["alpha", "beta", "gamma"];
        let b = ["alpha", "gamma"];
        assert_eq!(edit_distance(&a, &b), 1);

        let x = [1u32, 2, 3, 4];
        let y = [0u32, 2, 3, 5];
        assert_eq!(edit_distance(&x, &y), 2);
    }

    #[test]
    fn test_properties_random() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(7);
        for _ in 0..200 {
            let a = random_bytes(&mut rng, 12);
            let b = random_bytes(&mut rng, 12);
            let c = random_bytes(&mut rng, 12);

            let ab = edit_distance(&a, &b);
            assert_eq!(edit_distance(&a, &a), 0);
            assert_eq!(ab, edit_distance(&b, &a));
            assert!(edit_distance(&a, &c) <= ab + edit_distance(&b, &c));
            assert!(ab >= a.len().abs_diff(b.len()));
            assert!(ab <= a.len().max(b.len()));
            assert_eq!(edit_distance(&a, &[]), a.len());
        }
    }

    #[test]
    fn test_align_script_cost_matches_distance() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(11);
        for _ in 0..100 {
            let a = random_bytes(&mut rng, 15);
            let b = random_bytes(&mut rng, 15);
            let alignment = align(&a, &b);
            let cost: usize = alignment.operations.iter().map(EditOperation::cost).sum();
            assert_eq!(cost, alignment.distance);
            assert_eq!(alignment.summary().edits(), alignment.distance);

            let summary = alignment.summary();
            assert_eq!(
                summary.matches + summary.substitutions + summary.deletions,
                a.len()
            );
            assert_eq!(
                summary.matches + summary.substitutions + summary.insertions,
                b.len()
            );
        }
    }

    #[test]
    fn test_align_single_deletion() {
        let alignment = align(b"ACGT", b"AGT");
        assert_eq!(alignment.distance, 1);
        assert_eq!(
            alignment.operations,
            vec![
                EditOperation::Match { a: 0, b: 0 },
                EditOperation::Deletion { a: 1 },
                EditOperation::Match { a: 2, b: 1 },
                EditOperation::Match { a: 3, b: 2 },
            ]
        );
    }

    #[test]
    fn test_traceback_prefers_diagonal() {
        let matrix = DistanceMatrix::compute(b"AC", b"GT");
        let ops = matrix.traceback(b"AC", b"GT");
        assert_eq!(
            ops,
            vec![
                EditOperation::Substitution { a: 0, b: 0 },
                EditOperation::Substitution { a: 1, b: 1 },
            ]
        );
    }

    #[test]
    #[should_panic]
    fn test_traceback_rejects_other_inputs() {
        let matrix = DistanceMatrix::compute(b"ACG", b"AC");
        let _ = matrix.traceback(b"AC", b"AC");
    }

    #[test]
    fn test_align_from_empty() {
        let alignment = align(b"", b"AC");
        assert_eq!(
            alignment.operations,
            vec![
                EditOperation::Insertion { b: 0 },
                EditOperation::Insertion { b: 1 },
            ]
        );
    }
}
