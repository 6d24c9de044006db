//! Validation of an extraction routine against the reference table.

use std::path::Path;

use serde::Serialize;

use crate::error::Result;
use crate::input::Reference;
use crate::routine::StatementParser;

/// Coordinate of the first differing cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mismatch {
    /// Zero-based row index.
    pub row: usize,
    /// Column name at the mismatch.
    pub column: String,
}

/// Outcome of validating one extraction run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationResult {
    /// Whether extracted output equals the reference exactly.
    #[serde(skip)]
    pub passed: bool,
    /// Reference shape as (rows, columns).
    pub expected_shape: (usize, usize),
    /// Extracted shape as (rows, columns).
    pub parsed_shape: (usize, usize),
    /// First differing cell in row-major order. `None` on a pass, and
    /// also when shapes differ and elementwise comparison is impossible.
    pub first_mismatch: Option<Mismatch>,
}

impl ValidationResult {
    /// Render the diagnostic metadata as a compact JSON blob.
    pub fn debug_blob(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Compares extracted output cell-by-cell against the reference.
pub struct Validator;

impl Validator {
    /// Run `parser` against the sample document and compare the result to
    /// the reference table.
    ///
    /// Pass requires exactly equal shapes and exactly equal cells, null
    /// equaling null. The extracted table is reindexed to the reference
    /// schema first as a defensive re-assertion of the output invariant.
    pub fn validate(
        parser: &dyn StatementParser,
        pdf_path: &Path,
        reference: &Reference,
    ) -> Result<ValidationResult> {
        let parsed = parser.parse(pdf_path)?;
        let parsed = parsed.select(reference.schema.columns());

        let expected = &reference.table;
        let expected_shape = expected.shape();
        let parsed_shape = parsed.shape();

        if expected_shape != parsed_shape {
            // Elementwise comparison is impossible; report failure without
            // a coordinate.
            return Ok(ValidationResult {
                passed: false,
                expected_shape,
                parsed_shape,
                first_mismatch: None,
            });
        }

        let first_mismatch = expected
            .rows
            .iter()
            .zip(parsed.rows.iter())
            .enumerate()
            .find_map(|(row, (want, got))| {
                want.iter()
                    .zip(got.iter())
                    .position(|(a, b)| a != b)
                    .map(|col| Mismatch {
                        row,
                        column: parsed.columns[col].clone(),
                    })
            });

        Ok(ValidationResult {
            passed: first_mismatch.is_none(),
            expected_shape,
            parsed_shape,
            first_mismatch,
        })
    }
}
