//! Crate error types

use thiserror::Error;

/// Errors produced while building an author list.
///
/// Unresolved affiliation acronyms and oddly shaped names are *not* errors:
/// the former fall back to the raw token, the latter are reported through a
/// `tracing` warning and rendered as-is.
#[derive(Debug, Error)]
pub enum AuthorListError {
    /// Both render styles were requested at once.
    #[error("conflicting render styles: choose either the ApJ or the Nature format, not both")]
    ConfigConflict,

    /// A data row is missing one of the configured columns.
    #[error("row {row}: expected {expected} columns, found {found}")]
    MalformedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// The underlying table could not be read.
    #[error("failed to read table: {0}")]
    Read(#[from] csv::Error),
}
