//! Fuzz target for the column mapper.
//!
//! Checks that mapping arbitrary labels against an arbitrary schema never
//! panics and never invents labels or columns.

#![no_main]

use ledgersmith::{Schema, default_buckets, map_columns};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() > 4_000 {
        return;
    }

    let Ok(content) = std::str::from_utf8(data) else {
        return;
    };

    // First line holds schema columns, the rest are raw labels.
    let mut lines = content.lines();
    let columns: Vec<String> = lines
        .next()
        .unwrap_or("")
        .split(',')
        .map(|c| c.to_string())
        .collect();
    let raw: Vec<String> = lines.map(|l| l.to_string()).collect();

    // Invalid schemas (blank or duplicate columns) are rejected upstream.
    let Ok(schema) = Schema::new(columns) else {
        return;
    };

    let mapping = map_columns(&raw, &schema, &default_buckets());
    for (key, value) in &mapping {
        assert!(raw.contains(key));
        assert!(schema.columns().contains(value));
    }
});
