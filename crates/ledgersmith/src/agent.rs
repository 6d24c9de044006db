//! The generate-validate-retry loop.

use std::path::PathBuf;
use std::sync::Arc;

use crate::error::Result;
use crate::extract::{PdfExtractor, TableExtractor};
use crate::input::Reference;
use crate::routine::{RoutineBuilder, RoutineRegistry};
use crate::validate::{ValidationResult, Validator};

/// Everything one loop invocation needs. Immutable once created.
#[derive(Debug, Clone)]
pub struct Plan {
    /// Target identifier, e.g. a bank key like "icici".
    pub target: String,
    /// Sample statement document.
    pub pdf_path: PathBuf,
    /// Ground-truth reference table.
    pub reference_path: PathBuf,
    /// Where the routine artifact is persisted.
    pub routine_path: PathBuf,
}

impl Plan {
    /// Create a plan.
    pub fn new(
        target: impl Into<String>,
        pdf_path: impl Into<PathBuf>,
        reference_path: impl Into<PathBuf>,
        routine_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            target: target.into(),
            pdf_path: pdf_path.into(),
            reference_path: reference_path.into(),
            routine_path: routine_path.into(),
        }
    }
}

/// One attempt's outcome.
#[derive(Debug, Clone)]
pub struct AttemptReport {
    /// 1-based attempt number.
    pub attempt: u32,
    /// Validation outcome of the attempt.
    pub result: ValidationResult,
}

impl AttemptReport {
    /// Render the per-attempt status line.
    pub fn status_line(&self) -> String {
        if self.result.passed {
            format!("Attempt {}: PASS", self.attempt)
        } else {
            format!("Attempt {}: FAIL -> {}", self.attempt, self.result.debug_blob())
        }
    }
}

/// Outcome of a whole loop run.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    /// Whether any attempt passed.
    pub passed: bool,
    /// Reports for every attempt made, in order.
    pub attempts: Vec<AttemptReport>,
}

impl RunOutcome {
    /// Process exit code: 0 on success, 1 when all attempts are exhausted.
    pub fn exit_code(&self) -> i32 {
        if self.passed { 0 } else { 1 }
    }
}

/// The attempt-loop orchestrator.
///
/// Holds the table extractor and the routine registry; everything else is
/// re-derived per attempt.
pub struct Agent {
    extractor: Arc<dyn TableExtractor>,
    registry: RoutineRegistry,
}

impl Agent {
    /// Create an agent backed by the PDF extractor.
    pub fn new() -> Self {
        Self::with_extractor(Arc::new(PdfExtractor::new()))
    }

    /// Create an agent with a custom extractor (tests, offline runs).
    pub fn with_extractor(extractor: Arc<dyn TableExtractor>) -> Self {
        Self {
            extractor,
            registry: RoutineRegistry::new(),
        }
    }

    /// Run one attempt: re-read the reference, build and persist the
    /// routine artifact, reload it fresh, validate.
    ///
    /// The reference is re-read every attempt on purpose: the schema is
    /// assumed stable, but re-derivation allows editing the reference
    /// between attempts during iterative development.
    pub fn attempt(&mut self, plan: &Plan) -> Result<ValidationResult> {
        let reference = Reference::load(&plan.reference_path)?;

        let spec = RoutineBuilder::build(&plan.target, &reference);
        spec.save(&plan.routine_path)?;

        let routine =
            self.registry
                .reload(&plan.target, &plan.routine_path, self.extractor.clone())?;

        Validator::validate(routine.as_ref(), &plan.pdf_path, &reference)
    }

    /// Run up to `max_attempts` attempts, invoking `on_attempt` with each
    /// report as it is produced. Stops at the first pass.
    ///
    /// Attempts are pure functions of (target, schema, sample): no
    /// backoff, no mutation of the mapping heuristics between failures.
    pub fn run(
        &mut self,
        plan: &Plan,
        max_attempts: u32,
        mut on_attempt: impl FnMut(&AttemptReport),
    ) -> Result<RunOutcome> {
        let mut attempts = Vec::new();

        for attempt in 1..=max_attempts {
            let result = self.attempt(plan)?;
            let report = AttemptReport { attempt, result };
            on_attempt(&report);

            let passed = report.result.passed;
            attempts.push(report);
            if passed {
                return Ok(RunOutcome {
                    passed: true,
                    attempts,
                });
            }
        }

        Ok(RunOutcome {
            passed: false,
            attempts,
        })
    }
}

impl Default for Agent {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use crate::extract::MockExtractor;

    use super::*;

    fn cell(s: &str) -> Option<String> {
        Some(s.to_string())
    }

    fn plan_in(dir: &TempDir, reference: &str) -> Plan {
        let reference_path = dir.path().join("result.csv");
        fs::write(&reference_path, reference).unwrap();
        Plan::new(
            "icici",
            dir.path().join("sample.pdf"),
            reference_path,
            dir.path().join("routines").join("icici.routine.json"),
        )
    }

    fn matching_extractor() -> MockExtractor {
        let mut extractor = MockExtractor::new();
        extractor.push_table(vec![
            vec![cell("Date"), cell("Narration"), cell("Closing Balance")],
            vec![cell("01/01/2024"), cell("Opening Balance"), cell("1000")],
        ]);
        extractor
    }

    #[test]
    fn test_passing_run_stops_early() {
        let dir = TempDir::new().unwrap();
        let plan = plan_in(&dir, "Date,Description,Balance\n01-01-2024,Opening Balance,1000.0\n");

        let mut agent = Agent::with_extractor(Arc::new(matching_extractor()));
        let mut lines = Vec::new();
        let outcome = agent
            .run(&plan, 3, |report| lines.push(report.status_line()))
            .unwrap();

        assert!(outcome.passed);
        assert_eq!(outcome.exit_code(), 0);
        assert_eq!(lines, vec!["Attempt 1: PASS"]);
        assert!(plan.routine_path.exists());
    }

    #[test]
    fn test_exhausted_run_reports_every_attempt() {
        let dir = TempDir::new().unwrap();
        // Reference expects one row, but the extractor finds nothing.
        let plan = plan_in(&dir, "Date,Balance\n01-01-2024,1000.0\n");

        let mut agent = Agent::with_extractor(Arc::new(MockExtractor::new()));
        let mut lines = Vec::new();
        let outcome = agent
            .run(&plan, 3, |report| lines.push(report.status_line()))
            .unwrap();

        assert!(!outcome.passed);
        assert_eq!(outcome.exit_code(), 1);
        assert_eq!(outcome.attempts.len(), 3);
        assert_eq!(lines.len(), 3);
        for (i, line) in lines.iter().enumerate() {
            assert!(line.starts_with(&format!("Attempt {}: FAIL -> ", i + 1)));
        }
    }

    #[test]
    fn test_attempt_overwrites_artifact() {
        let dir = TempDir::new().unwrap();
        let plan = plan_in(&dir, "Date,Balance\n01-01-2024,1000.0\n");

        let mut agent = Agent::with_extractor(Arc::new(MockExtractor::new()));
        agent.attempt(&plan).unwrap();
        let first = fs::read(&plan.routine_path).unwrap();
        agent.attempt(&plan).unwrap();
        let second = fs::read(&plan.routine_path).unwrap();

        // Identical inputs produce an identical artifact.
        assert_eq!(first, second);
    }

    #[test]
    fn test_attempt_picks_up_edited_reference() {
        let dir = TempDir::new().unwrap();
        let plan = plan_in(&dir, "Date,Balance\n01-01-2024,1000.0\n");

        let mut agent = Agent::with_extractor(Arc::new(MockExtractor::new()));
        let first = agent.attempt(&plan).unwrap();
        assert_eq!(first.expected_shape, (1, 2));

        // Hot-edit the reference between attempts; the schema and the
        // artifact must follow.
        fs::write(&plan.reference_path, "Date,Description,Balance\n").unwrap();
        let second = agent.attempt(&plan).unwrap();
        assert_eq!(second.expected_shape, (0, 3));

        let routine = agent.registry.get("icici").unwrap();
        assert_eq!(routine.schema().columns(), &["Date", "Description", "Balance"]);
    }
}
