use core::fmt;

use serde::{Deserialize, Serialize};

/// A DNA nucleotide base.
///
/// Used by the DNA-specific utilities (complementary palindromes, reverse
/// complements, ORF translation).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Nucleotide {
    A = 0,
    C = 1,
    G = 2,
    T = 3,
}

impl Nucleotide {
    /// Convert from an ASCII byte (`b'A'`, `b'C'`, `b'G'`, `b'T'`) and also
    /// accepts lowercase bytes. Returns `None` for non-standard characters.
    #[inline]
    pub const fn from_ascii(byte: u8) -> Option<Self> {
        match byte {
            b'A' | b'a' => Some(Self::A),
            b'C' | b'c' => Some(Self::C),
            b'G' | b'g' => Some(Self::G),
            b'T' | b't' => Some(Self::T),
            _ => None,
        }
    }

    /// Convert to an uppercase ASCII byte representing this nucleotide.
    #[inline(always)]
    pub const fn to_ascii(self) -> u8 {
        match self {
            Self::A => b'A',
            Self::C => b'C',
            Self::G => b'G',
            Self::T => b'T',
        }
    }

    /// Return the complementary base (A <-> T, C <-> G).
    #[inline(always)]
    pub const fn complement(self) -> Self {
        match self {
            Self::A => Self::T,
            Self::T => Self::A,
            Self::C => Self::G,
            Self::G => Self::C,
        }
    }

    /// Return true if `a` and `b` are Watson-Crick partners.
    ///
    /// Case-insensitive; any byte outside `ACGT` never pairs.
    #[inline]
    pub fn pairs_with(a: u8, b: u8) -> bool {
        match (Self::from_ascii(a), Self::from_ascii(b)) {
            (Some(x), Some(y)) => x.complement() == y,
            _ => false,
        }
    }
}

/// Reverse complement of an ASCII DNA string.
///
/// Bases are upper-cased; anything outside `ACGT` becomes `N`.
pub fn reverse_complement(seq: &[u8]) -> Vec<u8> {
    seq.iter()
        .rev()
        .map(|&b| {
            Nucleotide::from_ascii(b)
                .map(|n| n.complement().to_ascii())
                .unwrap_or(b'N')
        })
        .collect()
}

impl From<Nucleotide> for char {
    #[inline(always)]
    fn from(nuc: Nucleotide) -> char {
        nuc.to_ascii() as char
    }
}

impl fmt::Display for Nucleotide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_ascii() as char)
    }
}
