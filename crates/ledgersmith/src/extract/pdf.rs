//! pdfplumber-backed table extraction.

use std::path::Path;

use pdfplumber::{Pdf, TableSettings};

use crate::error::{LedgersmithError, Result};

use super::extractor::{RawTable, TableExtractor};

/// Extracts tables from PDF documents with pdfplumber's default table
/// finder settings.
pub struct PdfExtractor {
    settings: TableSettings,
}

impl PdfExtractor {
    /// Create an extractor with default table settings.
    pub fn new() -> Self {
        Self {
            settings: TableSettings::default(),
        }
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl TableExtractor for PdfExtractor {
    fn extract_tables(&self, path: &Path) -> Result<Vec<RawTable>> {
        let location = path.to_string_lossy().into_owned();
        let pdf = Pdf::open_file(&location, None).map_err(|e| {
            LedgersmithError::Pdf(format!("cannot open '{}': {}", path.display(), e))
        })?;

        let mut tables = Vec::new();
        for page_result in pdf.pages_iter() {
            // A page that fails to parse contributes zero tables.
            let Ok(page) = page_result else {
                continue;
            };

            for table in page.find_tables(&self.settings) {
                let rows = table
                    .rows
                    .iter()
                    .map(|row| row.iter().map(|cell| cell.text.clone()).collect())
                    .collect();
                tables.push(RawTable::new(rows));
            }
        }

        Ok(tables)
    }
}
