//! Per-target routine registry with explicit invalidation.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use crate::error::{LedgersmithError, Result};
use crate::extract::TableExtractor;

use super::engine::Routine;
use super::spec::RoutineSpec;

/// Tracks the currently loaded routine per target.
///
/// `reload` always drops whatever was loaded for the target before reading
/// the artifact from disk again, so an overwritten artifact can never be
/// shadowed by a stale in-memory routine.
pub struct RoutineRegistry {
    loaded: HashMap<String, Arc<Routine>>,
}

impl RoutineRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            loaded: HashMap::new(),
        }
    }

    /// Invalidate any loaded routine for `target`, then load a fresh one
    /// from the artifact at `path`.
    pub fn reload(
        &mut self,
        target: &str,
        path: &Path,
        extractor: Arc<dyn TableExtractor>,
    ) -> Result<Arc<Routine>> {
        self.loaded.remove(target);

        let spec = RoutineSpec::load(path)?;
        if spec.target != target {
            return Err(LedgersmithError::Routine(format!(
                "routine '{}' was built for target '{}', not '{}'",
                path.display(),
                spec.target,
                target
            )));
        }

        let routine = Arc::new(Routine::new(spec, extractor)?);
        self.loaded.insert(target.to_string(), routine.clone());
        Ok(routine)
    }

    /// The currently loaded routine for `target`, if any.
    pub fn get(&self, target: &str) -> Option<Arc<Routine>> {
        self.loaded.get(target).cloned()
    }

    /// Drop the loaded routine for `target`. Returns whether one was
    /// loaded.
    pub fn invalidate(&mut self, target: &str) -> bool {
        self.loaded.remove(target).is_some()
    }
}

impl Default for RoutineRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::{NamedTempFile, TempDir};

    use crate::extract::MockExtractor;
    use crate::input::Reference;
    use crate::routine::RoutineBuilder;

    use super::*;

    fn reference(content: &str) -> Reference {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        Reference::load(file.path()).unwrap()
    }

    fn extractor() -> Arc<dyn TableExtractor> {
        Arc::new(MockExtractor::new())
    }

    #[test]
    fn test_reload_picks_up_overwritten_artifact() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("icici.routine.json");
        let mut registry = RoutineRegistry::new();

        RoutineBuilder::build("icici", &reference("Date,Balance\n1,2\n"))
            .save(&path)
            .unwrap();
        let first = registry.reload("icici", &path, extractor()).unwrap();
        assert_eq!(first.schema().columns(), &["Date", "Balance"]);

        // Overwrite with a different schema; the reload must not serve the
        // stale routine.
        RoutineBuilder::build("icici", &reference("Date,Description,Balance\n1,x,2\n"))
            .save(&path)
            .unwrap();
        let second = registry.reload("icici", &path, extractor()).unwrap();
        assert_eq!(second.schema().columns(), &["Date", "Description", "Balance"]);
    }

    #[test]
    fn test_reload_rejects_target_mismatch() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sbi.routine.json");
        let mut registry = RoutineRegistry::new();

        RoutineBuilder::build("sbi", &reference("Date,Balance\n1,2\n"))
            .save(&path)
            .unwrap();

        let err = registry.reload("icici", &path, extractor()).unwrap_err();
        assert!(err.to_string().contains("built for target 'sbi'"));
    }

    #[test]
    fn test_get_and_invalidate() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("icici.routine.json");
        let mut registry = RoutineRegistry::new();

        assert!(registry.get("icici").is_none());

        RoutineBuilder::build("icici", &reference("Date,Balance\n1,2\n"))
            .save(&path)
            .unwrap();
        registry.reload("icici", &path, extractor()).unwrap();
        assert!(registry.get("icici").is_some());

        assert!(registry.invalidate("icici"));
        assert!(registry.get("icici").is_none());
        assert!(!registry.invalidate("icici"));
    }
}
