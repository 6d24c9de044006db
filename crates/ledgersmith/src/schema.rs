//! Expected output schema derived from a reference table header.

use serde::{Deserialize, Serialize};

use crate::error::{LedgersmithError, Result};

/// Ordered list of canonical output column names.
///
/// The order is significant: it defines both extraction output order and
/// comparison order. Names are unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schema {
    columns: Vec<String>,
}

impl Schema {
    /// Build a schema from header labels, validating non-emptiness and
    /// uniqueness.
    pub fn new(columns: Vec<String>) -> Result<Self> {
        if columns.is_empty() {
            return Err(LedgersmithError::Schema(
                "reference header has no columns".to_string(),
            ));
        }
        for (i, name) in columns.iter().enumerate() {
            if name.trim().is_empty() {
                return Err(LedgersmithError::Schema(format!(
                    "reference header column {} is blank",
                    i + 1
                )));
            }
            if columns[..i].contains(name) {
                return Err(LedgersmithError::Schema(format!(
                    "duplicate reference column '{}'",
                    name
                )));
            }
        }
        Ok(Self { columns })
    }

    /// The column names, in order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether the schema has no columns. Never true for a constructed
    /// schema; present for completeness.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Find a schema column whose normalized name contains `needle`
    /// (already lowercased).
    pub fn find_containing(&self, needle: &str) -> Option<&str> {
        self.columns
            .iter()
            .find(|c| c.to_lowercase().contains(needle))
            .map(|c| c.as_str())
    }

    /// Find a schema column equal to `label` ignoring case and surrounding
    /// whitespace.
    pub fn find_exact(&self, label: &str) -> Option<&str> {
        let needle = label.trim().to_lowercase();
        self.columns
            .iter()
            .find(|c| c.trim().to_lowercase() == needle)
            .map(|c| c.as_str())
    }
}
