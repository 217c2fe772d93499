//! Edit-distance engine.
//!
//! Exact Levenshtein distance over any symbol type with `PartialEq`, the
//! underlying dynamic-programming table, and traceback into an edit script.

mod edit_distance;

pub use edit_distance::{align, edit_distance, Alignment, DistanceMatrix, EditOperation, EditSummary};
