//! The fixed extraction engine that interprets a routine artifact.

use std::path::Path;
use std::sync::Arc;

use crate::error::Result;
use crate::extract::TableExtractor;
use crate::mapping::map_columns;
use crate::normalize::{is_date_column, is_numeric_column, normalize_date, normalize_number};
use crate::schema::Schema;
use crate::table::{Table, Value};

use super::StatementParser;
use super::spec::RoutineSpec;

/// A loaded routine: an artifact bound to a table extractor.
///
/// One engine interprets every artifact; the artifact carries the data
/// (schema literal and mapping rules), the engine carries the behavior.
pub struct Routine {
    spec: RoutineSpec,
    schema: Schema,
    extractor: Arc<dyn TableExtractor>,
}

impl Routine {
    /// Bind an artifact to an extractor, validating its baked-in schema.
    pub fn new(spec: RoutineSpec, extractor: Arc<dyn TableExtractor>) -> Result<Self> {
        let schema = spec.schema()?;
        Ok(Self {
            spec,
            schema,
            extractor,
        })
    }

    /// The artifact this routine was loaded from.
    pub fn spec(&self) -> &RoutineSpec {
        &self.spec
    }

    /// The expected output schema.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }
}

impl std::fmt::Debug for Routine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Routine")
            .field("spec", &self.spec)
            .field("schema", &self.schema)
            .finish_non_exhaustive()
    }
}

impl StatementParser for Routine {
    fn parse(&self, pdf_path: &Path) -> Result<Table> {
        let raw_tables = self.extractor.extract_tables(pdf_path)?;

        // Keep tables with a header and at least one data row; row 0 is
        // the header, blank header cells become empty labels.
        let mut kept = Vec::new();
        for raw in raw_tables {
            if !raw.has_usable_header() {
                continue;
            }
            let labels = raw.header_labels();
            let rows = raw.rows[1..]
                .iter()
                .map(|row| {
                    row.iter()
                        .map(|cell| match cell {
                            Some(s) => Value::Text(s.clone()),
                            None => Value::Null,
                        })
                        .collect()
                })
                .collect();
            kept.push(Table::from_rows(labels, rows));
        }

        if kept.is_empty() {
            return Ok(Table::new(self.schema.columns().to_vec()));
        }

        let mut table = Table::concat(kept);
        table.drop_blank_columns();

        let mapping = map_columns(&table.columns, &self.schema, &self.spec.buckets);
        table.rename_columns(&mapping);

        // Reindex to exactly the expected schema: inserts all-null columns
        // for absent ones and drops everything unmapped.
        let mut table = table.select(self.schema.columns());

        if let Some(col) = table.columns.iter().position(|c| is_date_column(c)) {
            table.map_column(col, normalize_date);
        }

        for col in 0..table.columns.len() {
            if is_numeric_column(&table.columns[col]) {
                table.map_column(col, normalize_number);
            }
        }

        Ok(table)
    }
}
