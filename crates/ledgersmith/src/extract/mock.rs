//! Mock table extractor for testing.

use std::path::Path;

use crate::error::Result;

use super::extractor::{RawTable, TableExtractor};

/// Table extractor that returns a fixed set of raw tables regardless of
/// the document path.
pub struct MockExtractor {
    tables: Vec<RawTable>,
}

impl MockExtractor {
    /// Create a mock that extracts nothing.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Create a mock returning the given tables, in order.
    pub fn with_tables(tables: Vec<RawTable>) -> Self {
        Self { tables }
    }

    /// Append one raw table.
    pub fn push_table(&mut self, rows: Vec<Vec<Option<String>>>) {
        self.tables.push(RawTable::new(rows));
    }
}

impl Default for MockExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl TableExtractor for MockExtractor {
    fn extract_tables(&self, _path: &Path) -> Result<Vec<RawTable>> {
        Ok(self.tables.clone())
    }
}
