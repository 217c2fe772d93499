//! Reverse-complement palindromes.
//!
//! A stretch is a complementary palindrome when pairing it from both ends
//! inward always gives Watson-Crick partners (A-T, C-G); equivalently it
//! equals its own reverse complement. Every centre (on a symbol and between
//! two symbols) is expanded outwards while the flanking pair stays
//! complementary, and every stretch reached along the way is a candidate.

use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use twilight_sim::base::Nucleotide;

/// A palindromic stretch `seq[start..end]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palindrome {
    pub length: usize,
    pub start: usize,
    /// Exclusive end
    pub end: usize,
    pub sequence: String,
}

/// The `top_k` longest complementary palindromes in `seq`.
///
/// Results are ordered by `(length, start, end)` descending, so among equal
/// lengths later positions come first. Matching is case-insensitive and
/// symbols outside `ACGT` never pair.
///
/// ```
/// use twilight_analysis::palindrome::longest_complement_palindromes;
///
/// let top = longest_complement_palindromes(b"TTGAATTCTT", 1);
/// assert_eq!(top[0].sequence, "GAATTC");
/// ```
pub fn longest_complement_palindromes(seq: &[u8], top_k: usize) -> Vec<Palindrome> {
    if top_k == 0 {
        return Vec::new();
    }

    let n = seq.len();
    // Min-heap holding the best `top_k` spans seen so far
    let mut best: BinaryHeap<Reverse<(usize, usize, usize)>> = BinaryHeap::with_capacity(top_k + 1);
    let mut offer = |span: (usize, usize, usize)| {
        best.push(Reverse(span));
        if best.len() > top_k {
            best.pop();
        }
    };

    let centres = (0..n)
        .map(|c| (c, c))
        .chain((0..n.saturating_sub(1)).map(|c| (c, c + 1)));

    for (left, right) in centres {
        let (mut l, mut r) = (left, right);
        while r < n && Nucleotide::pairs_with(seq[l], seq[r]) {
            offer((r - l + 1, l, r + 1));
            if l == 0 {
                break;
            }
            l -= 1;
            r += 1;
        }
    }

    let mut spans: Vec<(usize, usize, usize)> = best.into_iter().map(|Reverse(s)| s).collect();
    spans.sort_unstable_by(|a, b| b.cmp(a));

    log::debug!("Found {} palindrome(s) in {} bases", spans.len(), n);

    spans
        .into_iter()
        .map(|(length, start, end)| Palindrome {
            length,
            start,
            end,
            sequence: String::from_utf8_lossy(&seq[start..end]).into_owned(),
        })
        .collect()
}
