//! Open reading frame scanning.
//!
//! Both strands are scanned in all three frames. Each frame is trimmed to a
//! whole number of codons and translated with the bacterial, archaeal and
//! plant plastid code (NCBI table 11). Within a translated frame an ORF runs
//! from an `M` to the next stop `*`, inclusive. After each hit the search
//! resumes one codon past the `M`, so ORFs nested in a longer one (sharing
//! its stop) are reported as well.

use crate::composition::gc_percent;
use serde::{Deserialize, Serialize};
use std::fmt;
use twilight_sim::base::reverse_complement;

/// Shortest ORF, in nucleotides including the stop codon, reported by default.
pub const DEFAULT_MIN_ORF_LENGTH: usize = 105;

/// NCBI table 11, codons in TCAG order.
const TABLE_11: &[u8; 64] = b"FFLLSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strand {
    Forward,
    Reverse,
}

impl fmt::Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strand::Forward => f.write_str("Forward"),
            Strand::Reverse => f.write_str("Reverse"),
        }
    }
}

/// An open reading frame.
///
/// `start` and `end` (exclusive) are coordinates on the scanned strand: for
/// the reverse strand they index into the reverse complement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Orf {
    pub sequence: String,
    pub start: usize,
    pub end: usize,
    /// Length in nucleotides
    pub length: usize,
    pub gc_percent: f64,
    pub strand: Strand,
    /// Reading frame, 1 to 3
    pub frame: u8,
}

#[inline]
fn base_index(b: u8) -> Option<usize> {
    match b {
        b'T' | b't' | b'U' | b'u' => Some(0),
        b'C' | b'c' => Some(1),
        b'A' | b'a' => Some(2),
        b'G' | b'g' => Some(3),
        _ => None,
    }
}

/// Translate one codon; codons with unknown bases give `X`.
#[inline]
pub fn translate_codon(codon: &[u8]) -> u8 {
    match codon {
        [a, b, c] => match (base_index(*a), base_index(*b), base_index(*c)) {
            (Some(i), Some(j), Some(k)) => TABLE_11[i * 16 + j * 4 + k],
            _ => b'X',
        },
        _ => b'X',
    }
}

/// Translate `seq` codon by codon; a trailing partial codon is ignored.
pub fn translate(seq: &[u8]) -> Vec<u8> {
    seq.chunks_exact(3).map(translate_codon).collect()
}

fn find_from(haystack: &[u8], needle: u8, from: usize) -> Option<usize> {
    haystack
        .get(from..)?
        .iter()
        .position(|&b| b == needle)
        .map(|p| p + from)
}

fn scan_strand(nuc: &[u8], strand: Strand, min_length: usize, out: &mut Vec<Orf>) {
    for frame in 0..3usize {
        if frame >= nuc.len() {
            break;
        }
        let usable = (nuc.len() - frame) / 3 * 3;
        let protein = translate(&nuc[frame..frame + usable]);

        let mut cursor = 0;
        while cursor < protein.len() {
            let Some(m) = find_from(&protein, b'M', cursor) else {
                break;
            };
            // No stop after this start means none after any later start either
            let Some(stop) = find_from(&protein, b'*', m) else {
                break;
            };

            let start = frame + 3 * m;
            let end = frame + 3 * stop + 3;
            if end - start >= min_length {
                let orf_seq = &nuc[start..end];
                out.push(Orf {
                    sequence: String::from_utf8_lossy(orf_seq).into_owned(),
                    start,
                    end,
                    length: end - start,
                    gc_percent: gc_percent(orf_seq),
                    strand,
                    frame: frame as u8 + 1,
                });
            }
            cursor = m + 1;
        }
    }
}

/// Find every ORF of at least `min_length` nucleotides on both strands.
///
/// Forward-strand ORFs come first, each strand ordered by frame then start.
pub fn find_orfs(seq: &[u8], min_length: usize) -> Vec<Orf> {
    let mut orfs = Vec::new();
    scan_strand(seq, Strand::Forward, min_length, &mut orfs);
    let reverse = reverse_complement(seq);
    scan_strand(&reverse, Strand::Reverse, min_length, &mut orfs);
    log::debug!(
        "Found {} ORF(s) >= {} nt in {} bases",
        orfs.len(),
        min_length,
        seq.len()
    );
    orfs
}

/// Sort ORFs by GC percent, highest first. Ties keep their scan order.
pub fn rank_by_gc(orfs: &mut [Orf]) {
    orfs.sort_by(|a, b| b.gc_percent.total_cmp(&a.gc_percent));
}
