//! Value normalization for date and numeric columns.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::table::Value;

/// Column-name fragments that mark a column as numeric.
pub const NUMERIC_KEYWORDS: &[&str] = &["debit", "credit", "balance", "amount", "amt"];

/// Whether a column name denotes a date column.
pub fn is_date_column(name: &str) -> bool {
    name.to_lowercase().contains("date")
}

/// Whether a column name denotes a numeric column.
pub fn is_numeric_column(name: &str) -> bool {
    let lower = name.to_lowercase();
    NUMERIC_KEYWORDS.iter().any(|k| lower.contains(k))
}

/// Date formats tried in order. Day-first layouts come before month-first
/// ones, which is what disambiguates "01/02/2024" as the 1st of February.
// Two-digit-year layouts precede four-digit ones: %y refuses four-digit
// input while %Y happily reads "24" as the year 24.
const DATE_FORMATS: &[&str] = &[
    "%d/%m/%y",
    "%d-%m-%y",
    "%d.%m.%y",
    "%d/%m/%Y",
    "%d-%m-%Y",
    "%d.%m.%Y",
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%d %b %Y",
    "%d %B %Y",
    "%d-%b-%Y",
    "%b %d, %Y",
    "%B %d, %Y",
    "%b %d %Y",
    "%m/%d/%y",
    "%m/%d/%Y",
    "%m-%d-%Y",
];

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Parse a calendar date with day-before-month disambiguation.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let cleaned = WHITESPACE.replace_all(raw.trim(), " ");
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(&cleaned, fmt).ok())
}

/// Normalize a date cell: reparse and reformat as `DD-MM-YYYY`.
///
/// Unparseable values pass through unchanged; empty strings and nulls
/// become null.
pub fn normalize_date(value: &Value) -> Value {
    match value {
        Value::Text(s) => {
            if s.trim().is_empty() {
                return Value::Null;
            }
            match parse_date(s) {
                Some(date) => Value::Text(date.format("%d-%m-%Y").to_string()),
                None => value.clone(),
            }
        }
        other => other.clone(),
    }
}

/// Normalize a numeric cell.
///
/// Numbers pass through as floats. Strings equal to "" or "-" become null;
/// anything else has thousands-separator commas stripped and is parsed as
/// a float, or becomes null when unparseable.
pub fn normalize_number(value: &Value) -> Value {
    match value {
        Value::Null => Value::Null,
        Value::Number(n) => Value::Number(*n),
        Value::Text(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() || trimmed == "-" {
                return Value::Null;
            }
            let stripped = trimmed.replace(',', "");
            match stripped.parse::<f64>() {
                Ok(n) => Value::Number(n),
                Err(_) => Value::Null,
            }
        }
    }
}
