//! Reference-table loading.

use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

use crate::error::Result;
use crate::schema::Schema;
use crate::table::{Table, Value};

/// A loaded ground-truth table: the schema derived from its header, its
/// contents in final comparable form, and a content hash of the file.
#[derive(Debug, Clone)]
pub struct Reference {
    /// Schema derived from the header row.
    pub schema: Schema,
    /// Typed table contents.
    pub table: Table,
    /// SHA-256 hash of the raw file bytes.
    pub hash: String,
    /// Where the reference was loaded from.
    pub path: PathBuf,
}

impl Reference {
    /// Load a reference CSV: first row is the header, remaining rows are
    /// data.
    ///
    /// Values are typed per column: a column is numeric iff every
    /// non-empty cell parses as a float, in which case cells load as
    /// floats; otherwise cells stay strings. Empty cells load as null in
    /// both cases.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let contents =
            std::fs::read(path).map_err(|e| crate::error::LedgersmithError::io(path, e))?;

        let mut hasher = Sha256::new();
        hasher.update(&contents);
        let hash = format!("sha256:{:x}", hasher.finalize());

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(contents.as_slice());

        let headers: Vec<String> = reader.headers()?.iter().map(|s| s.to_string()).collect();
        let schema = Schema::new(headers)?;

        let mut raw_rows: Vec<Vec<String>> = Vec::new();
        for record in reader.records() {
            let record = record?;
            let mut row: Vec<String> = record.iter().map(|s| s.to_string()).collect();
            row.resize(schema.len(), String::new());
            raw_rows.push(row);
        }

        let table = type_rows(&schema, raw_rows);

        Ok(Self {
            schema,
            table,
            hash,
            path: path.to_path_buf(),
        })
    }
}

/// Type raw string rows column by column.
fn type_rows(schema: &Schema, raw_rows: Vec<Vec<String>>) -> Table {
    let numeric: Vec<bool> = (0..schema.len())
        .map(|col| {
            raw_rows
                .iter()
                .map(|row| row[col].as_str())
                .filter(|cell| !cell.trim().is_empty())
                .all(|cell| cell.trim().parse::<f64>().is_ok())
        })
        .collect();

    let rows = raw_rows
        .into_iter()
        .map(|row| {
            row.into_iter()
                .enumerate()
                .map(|(col, cell)| {
                    if cell.trim().is_empty() {
                        Value::Null
                    } else if numeric[col] {
                        cell.trim()
                            .parse::<f64>()
                            .map(Value::Number)
                            .unwrap_or(Value::Null)
                    } else {
                        Value::Text(cell)
                    }
                })
                .collect()
        })
        .collect();

    Table::from_rows(schema.columns().to_vec(), rows)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn write_reference(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_schema_and_types() {
        let file = write_reference(
            "Date,Description,Debit Amt,Credit Amt,Balance\n\
             01-01-2024,Opening Balance,,,1000.0\n\
             02-01-2024,UPI Payment,500.0,,500.0\n",
        );

        let reference = Reference::load(file.path()).unwrap();
        assert_eq!(
            reference.schema.columns(),
            &["Date", "Description", "Debit Amt", "Credit Amt", "Balance"]
        );
        assert_eq!(reference.table.shape(), (2, 5));

        // Empty cells are null even in numeric columns.
        assert_eq!(reference.table.get(0, 2), Some(&Value::Null));
        assert_eq!(reference.table.get(0, 4), Some(&Value::Number(1000.0)));
        // Date column stays textual.
        assert_eq!(
            reference.table.get(0, 0),
            Some(&Value::Text("01-01-2024".to_string()))
        );
    }

    #[test]
    fn test_mixed_column_stays_text() {
        let file = write_reference("Code\n123\nabc\n");
        let reference = Reference::load(file.path()).unwrap();
        assert_eq!(reference.table.get(0, 0), Some(&Value::Text("123".to_string())));
    }

    #[test]
    fn test_hash_is_stable() {
        let file = write_reference("A\n1\n");
        let first = Reference::load(file.path()).unwrap();
        let second = Reference::load(file.path()).unwrap();
        assert!(first.hash.starts_with("sha256:"));
        assert_eq!(first.hash, second.hash);
    }

    #[test]
    fn test_duplicate_header_is_rejected() {
        let file = write_reference("Date,Date\n1,2\n");
        assert!(Reference::load(file.path()).is_err());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Reference::load("/nonexistent/result.csv").unwrap_err();
        assert!(err.to_string().contains("IO error"));
    }
}
