//! Error types for the Ledgersmith library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Ledgersmith operations.
#[derive(Debug, Error)]
pub enum LedgersmithError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// No sample document or reference table found for a target.
    #[error("Discovery error: {0}")]
    Discovery(String),

    /// The sample document could not be opened at all.
    #[error("PDF error: {0}")]
    Pdf(String),

    /// A persisted routine artifact is missing, unreadable, or incompatible.
    #[error("Routine error: {0}")]
    Routine(String),

    /// The reference header cannot form a valid schema.
    #[error("Schema error: {0}")]
    Schema(String),
}

impl LedgersmithError {
    /// Wrap an IO error with the path it occurred on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for Ledgersmith operations.
pub type Result<T> = std::result::Result<T, LedgersmithError>;
