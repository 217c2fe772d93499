//! FASTA reading and writing.
//!
//! Headers start with `>`; the first whitespace-separated word is the record
//! id and the rest of the line, if any, its description. Sequence lines are
//! concatenated after trimming, and blank lines are ignored.

use crate::base::Sequence;
use crate::errors::FastaError;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

/// Default line width used when writing sequences.
pub const DEFAULT_LINE_WIDTH: usize = 70;

/// A single FASTA entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastaRecord {
    pub id: String,
    pub description: Option<String>,
    pub sequence: Sequence,
}

impl FastaRecord {
    pub fn new(id: impl Into<String>, sequence: Sequence) -> Self {
        Self {
            id: id.into(),
            description: None,
            sequence,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Header line without the leading `>`.
    pub fn header(&self) -> String {
        match &self.description {
            Some(desc) => format!("{} {}", self.id, desc),
            None => self.id.clone(),
        }
    }
}

/// Parse every record from `reader`.
///
/// # Errors
/// Returns [`FastaError::Parse`] for sequence data before the first header
/// or a header without an id, and [`FastaError::Empty`] when no record is
/// found.
pub fn parse_fasta<R: BufRead>(reader: R) -> Result<Vec<FastaRecord>, FastaError> {
    let mut records = Vec::new();
    let mut current: Option<FastaRecord> = None;

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();

        if line.is_empty() {
            continue;
        }

        if let Some(header) = line.strip_prefix('>') {
            if let Some(record) = current.take() {
                records.push(record);
            }

            let mut parts = header.trim().splitn(2, char::is_whitespace);
            let id = parts
                .next()
                .filter(|id| !id.is_empty())
                .ok_or_else(|| FastaError::Parse {
                    line: idx + 1,
                    message: "Empty FASTA header".to_string(),
                })?;
            let description = parts
                .next()
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .map(str::to_string);

            current = Some(FastaRecord {
                id: id.to_string(),
                description,
                sequence: Sequence::new(),
            });
        } else {
            let record = current.as_mut().ok_or_else(|| FastaError::Parse {
                line: idx + 1,
                message: "Sequence data before the first header".to_string(),
            })?;
            for byte in line.bytes().filter(|b| !b.is_ascii_whitespace()) {
                record.sequence.push(byte);
            }
        }
    }

    if let Some(record) = current {
        records.push(record);
    }

    if records.is_empty() {
        return Err(FastaError::Empty);
    }

    log::debug!("Parsed {} FASTA record(s)", records.len());
    Ok(records)
}

/// Read every record from the FASTA file at `path`.
pub fn read_fasta(path: impl AsRef<Path>) -> Result<Vec<FastaRecord>, FastaError> {
    let path = path.as_ref();
    log::debug!("Reading FASTA from {}", path.display());
    let file = File::open(path)?;
    parse_fasta(BufReader::new(file))
}

/// Read a FASTA file that must contain exactly one record.
///
/// # Errors
/// Returns [`FastaError::MultipleRecords`] if more than one record is present.
pub fn read_single_fasta(path: impl AsRef<Path>) -> Result<FastaRecord, FastaError> {
    let mut records = read_fasta(path)?;
    if records.len() > 1 {
        return Err(FastaError::MultipleRecords(records.len()));
    }
    records.pop().ok_or(FastaError::Empty)
}

/// Write `record` with sequence lines wrapped at `width` symbols.
///
/// A `width` of 0 writes the whole sequence on one line.
pub fn write_fasta<W: Write>(
    writer: &mut W,
    record: &FastaRecord,
    width: usize,
) -> std::io::Result<()> {
    writeln!(writer, ">{}", record.header())?;
    let symbols = record.sequence.as_slice();
    if symbols.is_empty() {
        return Ok(());
    }
    let width = if width == 0 { symbols.len() } else { width };
    for chunk in symbols.chunks(width) {
        writer.write_all(chunk)?;
        writer.write_all(b"\n")?;
    }
    Ok(())
}
