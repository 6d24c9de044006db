//! Fuzzy mapping of extracted column labels onto schema column names.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::schema::Schema;

/// A semantic concept with the keywords that indicate it.
///
/// Buckets are matched in declared order; the order is part of the mapping
/// contract and is baked into persisted routines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordBucket {
    /// Concept name, matched against schema column names by containment.
    pub concept: String,
    /// Keywords matched against raw labels by containment.
    pub keywords: Vec<String>,
}

impl KeywordBucket {
    fn new(concept: &str, keywords: &[&str]) -> Self {
        Self {
            concept: concept.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }
}

/// The fixed bucket table used for freshly built routines.
static DEFAULT_BUCKETS: Lazy<Vec<KeywordBucket>> = Lazy::new(|| {
    vec![
        KeywordBucket::new("date", &["date", "txn date", "transaction date"]),
        KeywordBucket::new("description", &["description", "narration", "details"]),
        KeywordBucket::new("debit", &["debit", "withdrawal", "dr", "debit amt"]),
        KeywordBucket::new("credit", &["credit", "deposit", "cr", "credit amt"]),
        KeywordBucket::new("balance", &["balance", "closing balance", "available balance"]),
    ]
});

/// The default keyword buckets, in their fixed order.
pub fn default_buckets() -> Vec<KeywordBucket> {
    DEFAULT_BUCKETS.clone()
}

/// Map raw extracted labels onto schema column names.
///
/// Pure function. Each raw label is tried exactly first (case and
/// whitespace insensitive), then against the keyword buckets in order: a
/// label containing any bucket keyword maps to the first schema column
/// whose name contains the bucket concept. Labels matching nothing are
/// left out of the result.
///
/// Several raw labels may map to the same schema column; resolution of
/// that collision happens at column selection time, not here.
pub fn map_columns(
    raw: &[String],
    schema: &Schema,
    buckets: &[KeywordBucket],
) -> IndexMap<String, String> {
    let mut mapping = IndexMap::new();

    for label in raw {
        let normalized = label.trim().to_lowercase();

        if let Some(column) = schema.find_exact(label) {
            mapping.insert(label.clone(), column.to_string());
            continue;
        }

        for bucket in buckets {
            if !bucket.keywords.iter().any(|k| normalized.contains(k)) {
                continue;
            }
            if let Some(column) = schema.find_containing(&bucket.concept) {
                mapping.insert(label.clone(), column.to_string());
                break;
            }
        }
    }

    mapping
}
