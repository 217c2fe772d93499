//! Error types shared across the simulation crate.

use thiserror::Error;

/// Error returned when an alphabet cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlphabetError {
    /// The alphabet has no symbols.
    #[error("Alphabet must contain at least one symbol")]
    Empty,

    /// The same symbol was given more than once.
    #[error("Duplicate symbol in alphabet: '{0}'")]
    DuplicateSymbol(char),

    /// Symbols must be printable single-byte ASCII characters.
    #[error("Alphabet symbol is not a printable ASCII character: {0:?}")]
    NonAscii(char),
}

/// Error type for failures when constructing a `Sequence` from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidSequence {
    /// A character was not part of the alphabet (or not printable ASCII).
    #[error("Invalid symbol in sequence: {symbol:?} at position {position}")]
    InvalidSymbol { symbol: char, position: usize },
}

/// Error returned when an index is outside the valid range for a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Index {index} out of bounds (len = {len})")]
pub struct OutOfBounds {
    /// The index that was requested
    pub index: usize,

    /// The current length of the sequence (upper bound)
    pub len: usize,
}

/// Errors raised while validating or loading a simulation configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A parameter has a value the simulation cannot run with.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// The configuration file could not be read or written.
    #[error("Configuration IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file is not valid JSON for `SimulationConfig`.
    #[error("Configuration JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that can occur during simulation building.
#[derive(Debug, Error)]
pub enum BuilderError {
    /// The alphabet given to the builder is invalid.
    #[error(transparent)]
    Alphabet(#[from] AlphabetError),

    /// The assembled configuration failed validation.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors produced while reading FASTA input.
#[derive(Debug, Error)]
pub enum FastaError {
    #[error("FASTA IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed content, with the 1-based line number.
    #[error("FASTA parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("No sequences found in FASTA input")]
    Empty,

    /// A single record was required but several were present.
    #[error("Expected exactly one FASTA record, found {0}")]
    MultipleRecords(usize),
}
