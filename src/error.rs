//src/error.rs

use thiserror::Error;

/// Errors surfaced by report loading and summary derivation. Every variant is
/// local to one load or one pipeline run; the loaded row snapshot is never
/// left in a corrupted state.
#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("I/O error reading report: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed report row at line {line}: {reason}")]
    MalformedRow { line: usize, reason: String },

    #[error("report contains no rows")]
    EmptyReport,

    #[error("sample '{0}' not present in loaded report")]
    UnknownSample(String),

    #[error("unknown category '{0}' (expected Virus, Bacteria, Fungi, Human or unclassified)")]
    UnknownCategory(String),

    #[error("unknown taxonomy level '{0}' (expected Species or Genus)")]
    UnknownRank(String),
}
