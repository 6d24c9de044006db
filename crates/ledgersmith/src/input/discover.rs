//! Sample-document and reference-table discovery.

use std::path::{Path, PathBuf};

use crate::agent::Plan;
use crate::error::{LedgersmithError, Result};

/// Fixed reference filename looked for before falling back to any CSV.
const REFERENCE_FILENAME: &str = "result.csv";

/// The fixed per-target artifact location.
pub fn default_routine_path(target: &str) -> PathBuf {
    Path::new("routines").join(format!("{}.routine.json", target))
}

/// Discover the inputs for a target and assemble a [`Plan`].
///
/// The base directory is `data_dir` when given, `data/<target>` otherwise.
/// The sample PDF is the first match of a shallow glob, then a recursive
/// one; the reference table is `result.csv` in the base directory, falling
/// back to any CSV found the same way. Either missing is a fatal
/// `Discovery` error. The routine artifact gets a fixed per-target path.
pub fn discover(target: &str, data_dir: Option<&Path>) -> Result<Plan> {
    let base = match data_dir {
        Some(dir) => dir.to_path_buf(),
        None => Path::new("data").join(target),
    };

    let pdf_path = find_first(&base, "pdf")?.ok_or_else(|| {
        LedgersmithError::Discovery(format!("no PDF found under '{}'", base.display()))
    })?;

    let named = base.join(REFERENCE_FILENAME);
    let reference_path = if named.exists() {
        named
    } else {
        find_first(&base, "csv")?.ok_or_else(|| {
            LedgersmithError::Discovery(format!("no CSV found under '{}'", base.display()))
        })?
    };

    Ok(Plan::new(
        target,
        pdf_path,
        reference_path,
        default_routine_path(target),
    ))
}

/// First file with the given extension under `base`: shallow matches are
/// preferred, recursive matches are the fallback; each set is sorted for
/// determinism.
fn find_first(base: &Path, extension: &str) -> Result<Option<PathBuf>> {
    for pattern in [
        base.join(format!("*.{}", extension)),
        base.join(format!("**/*.{}", extension)),
    ] {
        let pattern = pattern.to_string_lossy().into_owned();
        let mut matches: Vec<PathBuf> = glob::glob(&pattern)
            .map_err(|e| LedgersmithError::Discovery(format!("bad glob '{}': {}", pattern, e)))?
            .filter_map(|entry| entry.ok())
            .filter(|p| p.is_file())
            .collect();
        matches.sort();
        if let Some(first) = matches.into_iter().next() {
            return Ok(Some(first));
        }
    }
    Ok(None)
}
