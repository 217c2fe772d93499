use super::Alphabet;
use crate::alignment::edit_distance;
use crate::errors::{InvalidSequence, OutOfBounds};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Mutable symbol sequence backed by a vector of ASCII bytes.
///
/// `Sequence` does not carry its alphabet; the alphabet is passed explicitly
/// to the operations that need one (generation, mutation, validation). Two
/// sequences built over different alphabet instances can therefore still be
/// compared symbol by symbol.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sequence(Vec<u8>);

impl Sequence {
    /// Create a new, empty `Sequence`.
    ///
    /// ```rust
    /// # use twilight_sim::base::Sequence;
    /// let seq = Sequence::new();
    /// assert_eq!(seq.len(), 0);
    /// ```
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Create a `Sequence` with reserved capacity for `capacity` symbols.
    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    /// Parse `text` and check that every symbol belongs to `alphabet`.
    ///
    /// # Errors
    /// Returns [`InvalidSequence::InvalidSymbol`] for the first character not
    /// present in the alphabet.
    pub fn parse(text: &str, alphabet: &Alphabet) -> Result<Self, InvalidSequence> {
        text.chars()
            .enumerate()
            .map(|(position, c)| {
                if c.is_ascii() && alphabet.contains(c as u8) {
                    Ok(c as u8)
                } else {
                    Err(InvalidSequence::InvalidSymbol {
                        symbol: c,
                        position,
                    })
                }
            })
            .collect::<Result<Vec<u8>, _>>()
            .map(Self)
    }

    /// Return the length of the sequence in symbols.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Return `true` if the sequence contains no symbols.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Return the symbol at `index`, or `None` if out of range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<u8> {
        self.0.get(index).copied()
    }

    /// Set the symbol at `index`.
    ///
    /// Returns `OutOfBounds` if `index` is greater than or equal to the
    /// sequence length.
    #[inline]
    pub fn set(&mut self, index: usize, symbol: u8) -> Result<(), OutOfBounds> {
        let len = self.len();
        self.0
            .get_mut(index)
            .map(|slot| *slot = symbol)
            .ok_or(OutOfBounds { index, len })
    }

    /// Insert `symbol` before position `index` (`index == len` appends).
    ///
    /// Returns `OutOfBounds` if `index` is greater than the sequence length.
    #[inline]
    pub fn insert(&mut self, index: usize, symbol: u8) -> Result<(), OutOfBounds> {
        if index > self.len() {
            return Err(OutOfBounds {
                index,
                len: self.len(),
            });
        }
        self.0.insert(index, symbol);
        Ok(())
    }

    /// Remove and return the symbol at `index`.
    #[inline]
    pub fn remove(&mut self, index: usize) -> Result<u8, OutOfBounds> {
        if index >= self.len() {
            return Err(OutOfBounds {
                index,
                len: self.len(),
            });
        }
        Ok(self.0.remove(index))
    }

    /// Append `symbol` to the end of the sequence.
    #[inline]
    pub fn push(&mut self, symbol: u8) {
        self.0.push(symbol);
    }

    /// Borrow the underlying symbol slice.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// Borrow the mutable underlying symbol slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.0
    }

    /// Return `true` if every symbol belongs to `alphabet`.
    pub fn is_over(&self, alphabet: &Alphabet) -> bool {
        self.0.iter().all(|&s| alphabet.contains(s))
    }

    /// Levenshtein distance to `other` (unit costs).
    #[inline]
    pub fn distance_to(&self, other: &Sequence) -> usize {
        edit_distance(self.as_slice(), other.as_slice())
    }
}

impl AsRef<[u8]> for Sequence {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<&[u8]> for Sequence {
    fn from(symbols: &[u8]) -> Self {
        Self(symbols.to_vec())
    }
}

impl FromIterator<u8> for Sequence {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &symbol in &self.0 {
            write!(f, "{}", symbol as char)?;
        }
        Ok(())
    }
}

impl FromStr for Sequence {
    type Err = InvalidSequence;

    /// Parse a textual representation (e.g. "ACGT") into a `Sequence`.
    ///
    /// Any printable ASCII character is accepted as a symbol; use
    /// [`Sequence::parse`] to restrict input to an alphabet. Case is preserved.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .enumerate()
            .map(|(position, c)| {
                if c.is_ascii_graphic() {
                    Ok(c as u8)
                } else {
                    Err(InvalidSequence::InvalidSymbol {
                        symbol: c,
                        position,
                    })
                }
            })
            .collect::<Result<Vec<u8>, _>>()
            .map(Self)
    }
}
