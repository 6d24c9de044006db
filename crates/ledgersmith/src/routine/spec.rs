//! The persisted routine artifact and its builder.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{LedgersmithError, Result};
use crate::input::Reference;
use crate::mapping::{KeywordBucket, default_buckets};
use crate::schema::Schema;

/// Artifact format version understood by this engine.
pub const ROUTINE_FORMAT_VERSION: u32 = 1;

/// A self-contained extraction routine, persisted as JSON.
///
/// The expected schema is baked in as a literal, and the keyword buckets
/// travel with the artifact so a routine keeps behaving the same even if
/// the built-in defaults change later. Serialization is deterministic:
/// identical inputs produce byte-identical artifacts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutineSpec {
    /// Artifact format version.
    pub version: u32,
    /// Target identifier the routine was built for.
    pub target: String,
    /// Expected output columns, in order.
    pub expected_columns: Vec<String>,
    /// Keyword buckets used for column mapping.
    pub buckets: Vec<KeywordBucket>,
    /// Hash of the reference table the schema was derived from.
    pub reference_hash: String,
}

impl RoutineSpec {
    /// Validate and return the expected schema.
    pub fn schema(&self) -> Result<Schema> {
        Schema::new(self.expected_columns.clone())
    }

    /// Persist the artifact, overwriting any prior version at `path`.
    /// Parent directories are created as needed.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| LedgersmithError::io(parent, e))?;
            }
        }

        let file = File::create(path).map_err(|e| LedgersmithError::io(path, e))?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Load an artifact from disk, rejecting unknown format versions.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let file = File::open(path).map_err(|e| {
            LedgersmithError::Routine(format!("cannot open routine '{}': {}", path.display(), e))
        })?;
        let reader = BufReader::new(file);
        let spec: RoutineSpec = serde_json::from_reader(reader).map_err(|e| {
            LedgersmithError::Routine(format!("cannot parse routine '{}': {}", path.display(), e))
        })?;

        if spec.version != ROUTINE_FORMAT_VERSION {
            return Err(LedgersmithError::Routine(format!(
                "routine '{}' has unsupported format version {}",
                path.display(),
                spec.version
            )));
        }

        Ok(spec)
    }
}

/// Builds routine artifacts from a target and its reference table.
pub struct RoutineBuilder;

impl RoutineBuilder {
    /// Synthesize a routine for `target` with the reference's schema baked
    /// in as a literal constant.
    pub fn build(target: &str, reference: &Reference) -> RoutineSpec {
        RoutineSpec {
            version: ROUTINE_FORMAT_VERSION,
            target: target.to_string(),
            expected_columns: reference.schema.columns().to_vec(),
            buckets: default_buckets(),
            reference_hash: reference.hash.clone(),
        }
    }
}
