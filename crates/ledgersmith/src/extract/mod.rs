//! The PDF table-extraction seam.
//!
//! Table extraction is a black box behind [`TableExtractor`]: it returns
//! raw grids of optional text cells in page order and nothing else. The
//! production implementation wraps pdfplumber; the mock returns canned
//! tables for tests and offline runs.

mod extractor;
mod mock;
mod pdf;

pub use extractor::{RawTable, TableExtractor};
pub use mock::MockExtractor;
pub use pdf::PdfExtractor;
