use crate::errors::AlphabetError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Symbols of the default six-base alphabet.
pub const DEFAULT_SYMBOLS: &str = "ACGTBD";

/// Shared, immutable alphabet of single-byte symbols.
///
/// The order of the symbols determines their index. Cloning is cheap: the
/// symbol table is reference counted so every sequence generator in a run can
/// hold its own handle to the same alphabet.
///
/// An `Alphabet` is never empty and never contains the same symbol twice;
/// both conditions are rejected at construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Alphabet {
    /// Symbol bytes in index order
    symbols: Arc<[u8]>,
    /// Mapping from symbol to index for fast lookup
    symbol_to_index: Arc<HashMap<u8, usize>>,
}

impl Alphabet {
    /// Create a new alphabet from printable ASCII symbols.
    ///
    /// # Errors
    /// Returns [`AlphabetError::Empty`] for an empty symbol list,
    /// [`AlphabetError::DuplicateSymbol`] when a symbol repeats and
    /// [`AlphabetError::NonAscii`] for anything outside printable ASCII.
    ///
    /// ```
    /// use twilight_sim::base::Alphabet;
    ///
    /// let alphabet = Alphabet::new("ACGT").unwrap();
    /// assert_eq!(alphabet.len(), 4);
    /// assert!(Alphabet::new("").is_err());
    /// ```
    pub fn new(symbols: &str) -> Result<Self, AlphabetError> {
        if symbols.is_empty() {
            return Err(AlphabetError::Empty);
        }

        let mut bytes = Vec::with_capacity(symbols.len());
        let mut symbol_to_index = HashMap::with_capacity(symbols.len());
        for c in symbols.chars() {
            if !c.is_ascii_graphic() {
                return Err(AlphabetError::NonAscii(c));
            }
            let byte = c as u8;
            if symbol_to_index.insert(byte, bytes.len()).is_some() {
                return Err(AlphabetError::DuplicateSymbol(c));
            }
            bytes.push(byte);
        }

        Ok(Self {
            symbols: bytes.into(),
            symbol_to_index: Arc::new(symbol_to_index),
        })
    }

    /// Standard DNA alphabet (A, C, G, T).
    pub fn dna() -> Self {
        Self::new("ACGT").expect("DNA alphabet is valid")
    }

    /// Six-base alphabet `ACGTBD` used by the divergence experiments.
    pub fn extended() -> Self {
        Self::new(DEFAULT_SYMBOLS).expect("default alphabet is valid")
    }

    /// Number of symbols in the alphabet (always at least 1).
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always `false`; present for API symmetry with collections.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Symbol at `index`.
    #[inline]
    pub fn symbol(&self, index: usize) -> Option<u8> {
        self.symbols.get(index).copied()
    }

    /// Index of `symbol`, if it belongs to the alphabet.
    #[inline]
    pub fn index_of(&self, symbol: u8) -> Option<usize> {
        self.symbol_to_index.get(&symbol).copied()
    }

    /// All symbols as a slice.
    #[inline]
    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }

    #[inline]
    pub fn contains(&self, symbol: u8) -> bool {
        self.symbol_to_index.contains_key(&symbol)
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::extended()
    }
}

impl PartialEq for Alphabet {
    fn eq(&self, other: &Self) -> bool {
        // Fast path: check if they point to the same Arc
        Arc::ptr_eq(&self.symbols, &other.symbols) || self.symbols == other.symbols
    }
}

impl Eq for Alphabet {}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &symbol in self.symbols.iter() {
            write!(f, "{}", symbol as char)?;
        }
        Ok(())
    }
}

impl FromStr for Alphabet {
    type Err = AlphabetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Alphabet {
    type Error = AlphabetError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Alphabet> for String {
    fn from(alphabet: Alphabet) -> Self {
        alphabet.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_new() {
        let alphabet = Alphabet::new("ACGT").unwrap();
        assert_eq!(alphabet.len(), 4);
        assert!(!alphabet.is_empty());
    }

    #[test]
    fn test_alphabet_extended_is_default() {
        let alphabet = Alphabet::default();
        assert_eq!(alphabet.len(), 6);
        assert_eq!(alphabet.symbols(), b"ACGTBD");
        assert_eq!(alphabet, Alphabet::extended());
    }

    #[test]
    fn test_alphabet_rejects_empty() {
        assert_eq!(Alphabet::new(""), Err(AlphabetError::Empty));
    }

    #[test]
    fn test_alphabet_rejects_duplicates() {
        assert_eq!(
            Alphabet::new("ACGA"),
            Err(AlphabetError::DuplicateSymbol('A'))
        );
    }

    #[test]
    fn test_alphabet_rejects_non_ascii() {
        assert_eq!(Alphabet::new("Aβ"), Err(AlphabetError::NonAscii('β')));
        assert_eq!(Alphabet::new("A C"), Err(AlphabetError::NonAscii(' ')));
    }

    #[test]
    fn test_alphabet_lookup() {
        let alphabet = Alphabet::dna();
        assert_eq!(alphabet.symbol(0), Some(b'A'));
        assert_eq!(alphabet.symbol(3), Some(b'T'));
        assert_eq!(alphabet.symbol(4), None);
        assert_eq!(alphabet.index_of(b'G'), Some(2));
        assert_eq!(alphabet.index_of(b'N'), None);
        assert!(alphabet.contains(b'C'));
        assert!(!alphabet.contains(b'c')); // Case sensitive
    }

    #[test]
    fn test_alphabet_ordering_matters() {
        let forward = Alphabet::new("ACGT").unwrap();
        let reverse = Alphabet::new("TGCA").unwrap();
        assert_eq!(forward.index_of(b'A'), Some(0));
        assert_eq!(reverse.index_of(b'A'), Some(3));
        assert_ne!(forward, reverse);
    }

    #[test]
    fn test_alphabet_clone_is_cheap() {
        let alphabet1 = Alphabet::extended();
        let alphabet2 = alphabet1.clone();
        assert!(Arc::ptr_eq(&alphabet1.symbols, &alphabet2.symbols));
        assert!(Arc::ptr_eq(
            &alphabet1.symbol_to_index,
            &alphabet2.symbol_to_index
        ));
    }

    #[test]
    fn test_alphabet_serde_round_trip() {
        let alphabet = Alphabet::new("01").unwrap();
        let json = serde_json::to_string(&alphabet).unwrap();
        assert_eq!(json, "\"01\"");
        let back: Alphabet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, alphabet);
    }

    #[test]
    fn test_alphabet_deserialize_validates() {
        assert!(serde_json::from_str::<Alphabet>("\"\"").is_err());
        assert!(serde_json::from_str::<Alphabet>("\"AA\"").is_err());
    }
}
