//! Property-based tests for the column mapper and the value normalizers.
//!
//! These verify the invariants that hold for all inputs:
//! 1. **No panics**: mapping and normalization never crash
//! 2. **Determinism**: same input always produces same output
//! 3. **Containment**: mapping output never invents labels or columns

use proptest::prelude::*;

use ledgersmith::{Schema, Value, default_buckets, map_columns};
use ledgersmith::normalize::{normalize_date, normalize_number};

// =============================================================================
// Test Strategies
// =============================================================================

/// Arbitrary column-label-like strings.
fn label() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 _\\-\\.]{0,30}"
}

/// A non-empty set of unique, non-blank schema column names.
fn schema_columns() -> impl Strategy<Value = Vec<String>> {
    prop::collection::hash_set("[A-Za-z][A-Za-z ]{0,15}", 1..6)
        .prop_map(|set| set.into_iter().collect())
}

/// Strings that look like the values found in statement cells.
fn cell_value() -> impl Strategy<Value = String> {
    prop_oneof![
        "[0-9]{1,2}/[0-9]{1,2}/[0-9]{2,4}",
        "-?[0-9]{1,3}(,[0-9]{3})*(\\.[0-9]{1,2})?",
        "[a-zA-Z ]{0,20}",
        Just(String::new()),
        Just("-".to_string()),
    ]
}

// =============================================================================
// Mapper Properties
// =============================================================================

proptest! {
    #[test]
    fn mapping_keys_are_subset_of_raw_labels(
        raw in prop::collection::vec(label(), 0..8),
        columns in schema_columns(),
    ) {
        let schema = Schema::new(columns).unwrap();
        let mapping = map_columns(&raw, &schema, &default_buckets());

        for (key, value) in &mapping {
            prop_assert!(raw.contains(key));
            prop_assert!(schema.columns().contains(value));
        }
    }

    #[test]
    fn mapping_is_deterministic(
        raw in prop::collection::vec(label(), 0..8),
        columns in schema_columns(),
    ) {
        let schema = Schema::new(columns).unwrap();
        let first = map_columns(&raw, &schema, &default_buckets());
        let second = map_columns(&raw, &schema, &default_buckets());
        prop_assert_eq!(first, second);
    }
}

// =============================================================================
// Normalizer Properties
// =============================================================================

proptest! {
    #[test]
    fn number_normalization_is_total(value in cell_value()) {
        let out = normalize_number(&Value::Text(value));
        prop_assert!(matches!(out, Value::Null | Value::Number(_)));
    }

    #[test]
    fn number_normalization_never_yields_nan_from_digits(
        value in "-?[0-9]{1,3}(,[0-9]{3})*(\\.[0-9]{1,2})?"
    ) {
        match normalize_number(&Value::Text(value)) {
            Value::Number(n) => prop_assert!(n.is_finite()),
            other => prop_assert!(false, "digit string normalized to {:?}", other),
        }
    }

    #[test]
    fn date_normalization_is_total(value in cell_value()) {
        let _ = normalize_date(&Value::Text(value));
    }

    #[test]
    fn normalized_dates_have_canonical_form(
        day in 1u32..29,
        month in 1u32..13,
        year in 1990i32..2100,
    ) {
        let raw = format!("{:02}/{:02}/{}", day, month, year);
        match normalize_date(&Value::Text(raw)) {
            Value::Text(s) => prop_assert_eq!(s, format!("{:02}-{:02}-{}", day, month, year)),
            other => prop_assert!(false, "unexpected {:?}", other),
        }
    }

    #[test]
    fn blank_values_normalize_to_null(padding in " {0,5}") {
        prop_assert_eq!(normalize_number(&Value::Text(padding.clone())), Value::Null);
        prop_assert_eq!(normalize_date(&Value::Text(padding)), Value::Null);
    }
}
