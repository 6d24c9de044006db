//! Ledgersmith: self-validating extraction routines for bank-statement PDFs.
//!
//! Ledgersmith derives an expected schema from a known-good reference
//! table, synthesizes a column-mapping + extraction routine for that
//! schema, persists it as an inspectable artifact, and validates the
//! routine's output cell-by-cell against the reference — retrying up to a
//! bounded number of attempts.
//!
//! # Core Principles
//!
//! - **Reference-driven**: the reference table is the single source of
//!   truth for both schema and expected values
//! - **Inspectable artifacts**: every generated routine lives on disk and
//!   is reloaded fresh on each attempt
//! - **Graceful degradation**: unparseable values become nulls or pass
//!   through; only missing inputs abort a run
//!
//! # Example
//!
//! ```no_run
//! use ledgersmith::{Agent, discover};
//!
//! let plan = discover("icici", None).unwrap();
//! let mut agent = Agent::new();
//! let outcome = agent
//!     .run(&plan, 3, |report| println!("{}", report.status_line()))
//!     .unwrap();
//!
//! std::process::exit(outcome.exit_code());
//! ```

pub mod agent;
pub mod error;
pub mod extract;
pub mod input;
pub mod mapping;
pub mod normalize;
pub mod routine;
pub mod schema;
pub mod table;
pub mod validate;

pub use agent::{Agent, AttemptReport, Plan, RunOutcome};
pub use error::{LedgersmithError, Result};
pub use extract::{MockExtractor, PdfExtractor, RawTable, TableExtractor};
pub use input::{Reference, default_routine_path, discover};
pub use mapping::{KeywordBucket, default_buckets, map_columns};
pub use routine::{Routine, RoutineBuilder, RoutineRegistry, RoutineSpec, StatementParser};
pub use schema::Schema;
pub use table::{Table, Value};
pub use validate::{Mismatch, ValidationResult, Validator};
