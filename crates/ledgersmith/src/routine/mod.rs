//! Extraction routines: the persisted artifact, the engine that interprets
//! it, and the per-target registry that keeps reloads fresh.

use std::path::Path;

use crate::error::Result;
use crate::table::Table;

mod engine;
mod registry;
mod spec;

pub use engine::Routine;
pub use registry::RoutineRegistry;
pub use spec::{ROUTINE_FORMAT_VERSION, RoutineBuilder, RoutineSpec};

/// The parser contract: anything that turns a statement document into a
/// table. Structural on purpose — no base type beyond this one method.
pub trait StatementParser {
    /// Parse the document at `pdf_path` into a table whose columns match
    /// the expected schema exactly.
    fn parse(&self, pdf_path: &Path) -> Result<Table>;
}
