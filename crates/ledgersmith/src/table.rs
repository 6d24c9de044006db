//! Ordered tabular data with typed cells.

use std::io::Write;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A single cell value.
///
/// Mirrors the comparable forms a loaded reference table can hold: missing
/// values, raw strings, and fully parsed floats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Missing value.
    Null,
    /// Raw string value.
    Text(String),
    /// Parsed floating point value.
    Number(f64),
}

impl Value {
    /// Check whether this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Borrow the string content, if any.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get the numeric content, if any.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Render the value as a CSV field.
    ///
    /// Integral floats keep one decimal place so exported numeric columns
    /// read uniformly as floats.
    pub fn to_field(&self) -> String {
        match self {
            Value::Null => String::new(),
            Value::Text(s) => s.clone(),
            Value::Number(n) if n.fract() == 0.0 && n.is_finite() => format!("{:.1}", n),
            Value::Number(n) => format!("{}", n),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

/// An ordered table: named columns and row-major typed cells.
///
/// Column order is significant throughout; it defines both extraction
/// output order and comparison order.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// Column labels, in order. Duplicates may appear transiently after
    /// renaming; `select` resolves them with a last-wins rule.
    pub columns: Vec<String>,
    /// Row data (row-major).
    pub rows: Vec<Vec<Value>>,
}

impl Table {
    /// Create an empty table with the given columns.
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Create a table from columns and rows, padding or truncating each
    /// row to the column count.
    pub fn from_rows(columns: Vec<String>, rows: Vec<Vec<Value>>) -> Self {
        let width = columns.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, Value::Null);
                row
            })
            .collect();
        Self { columns, rows }
    }

    /// Get the (rows, columns) shape.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.columns.len())
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Get a specific cell value.
    pub fn get(&self, row: usize, col: usize) -> Option<&Value> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Index of the first column with the given label.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Concatenate tables into one, taking the union of columns by name in
    /// first-seen order. Missing values become null; row order is preserved
    /// within and across the inputs.
    pub fn concat(tables: Vec<Table>) -> Table {
        let mut union: IndexMap<String, usize> = IndexMap::new();
        for table in &tables {
            for label in &table.columns {
                let next = union.len();
                union.entry(label.clone()).or_insert(next);
            }
        }

        let columns: Vec<String> = union.keys().cloned().collect();
        let mut rows = Vec::new();
        for table in tables {
            let targets: Vec<usize> = table.columns.iter().map(|c| union[c]).collect();
            for row in table.rows {
                let mut out = vec![Value::Null; columns.len()];
                for (target, value) in targets.iter().zip(row) {
                    out[*target] = value;
                }
                rows.push(out);
            }
        }

        Table { columns, rows }
    }

    /// Drop every column whose trimmed label is empty.
    pub fn drop_blank_columns(&mut self) {
        let keep: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .filter(|(_, c)| !c.trim().is_empty())
            .map(|(i, _)| i)
            .collect();
        if keep.len() == self.columns.len() {
            return;
        }
        self.columns = keep.iter().map(|&i| self.columns[i].clone()).collect();
        for row in &mut self.rows {
            *row = keep
                .iter()
                .map(|&i| row.get(i).cloned().unwrap_or(Value::Null))
                .collect();
        }
    }

    /// Rename column labels according to the mapping. Labels not in the
    /// mapping are left unchanged; duplicates may result.
    pub fn rename_columns(&mut self, mapping: &IndexMap<String, String>) {
        for label in &mut self.columns {
            if let Some(renamed) = mapping.get(label) {
                *label = renamed.clone();
            }
        }
    }

    /// Reindex to exactly the given column order.
    ///
    /// For each requested column the LAST matching source column wins;
    /// requested columns with no source become all-null. Source columns not
    /// requested are dropped.
    pub fn select(&self, columns: &[String]) -> Table {
        let sources: Vec<Option<usize>> = columns
            .iter()
            .map(|name| self.columns.iter().rposition(|c| c == name))
            .collect();

        let rows = self
            .rows
            .iter()
            .map(|row| {
                sources
                    .iter()
                    .map(|src| match src {
                        Some(i) => row.get(*i).cloned().unwrap_or(Value::Null),
                        None => Value::Null,
                    })
                    .collect()
            })
            .collect();

        Table {
            columns: columns.to_vec(),
            rows,
        }
    }

    /// Rewrite every value in a column through `f`.
    pub fn map_column(&mut self, col: usize, f: impl Fn(&Value) -> Value) {
        for row in &mut self.rows {
            if let Some(cell) = row.get_mut(col) {
                *cell = f(cell);
            }
        }
    }

    /// Write the table as CSV: header row, then data rows.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut out = csv::Writer::from_writer(writer);
        out.write_record(&self.columns)?;
        for row in &self.rows {
            out.write_record(row.iter().map(|v| v.to_field()))?;
        }
        out.flush()
            .map_err(|e| crate::error::LedgersmithError::io("<output>", e))?;
        Ok(())
    }
}
