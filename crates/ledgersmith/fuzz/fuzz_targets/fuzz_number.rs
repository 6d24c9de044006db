//! Fuzz target for numeric normalization.
//!
//! Checks that coercion never panics and only ever yields a float or null.

#![no_main]

use ledgersmith::Value;
use ledgersmith::normalize::normalize_number;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() > 1_000 {
        return;
    }

    if let Ok(content) = std::str::from_utf8(data) {
        let out = normalize_number(&Value::Text(content.to_string()));
        assert!(matches!(out, Value::Null | Value::Number(_)));
    }
});
