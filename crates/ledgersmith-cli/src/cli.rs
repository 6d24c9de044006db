//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Ledgersmith: self-validating bank-statement parser generator
#[derive(Parser)]
#[command(name = "ledgersmith")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a routine for a target and validate it against the
    /// reference table, retrying up to a bounded number of attempts
    Run {
        /// Target bank key, e.g. "icici" or "sbi"
        #[arg(value_name = "TARGET")]
        target: String,

        /// Override for the data directory (default: data/<TARGET>)
        #[arg(short, long)]
        data_dir: Option<PathBuf>,

        /// Maximum generate-validate attempts
        #[arg(short, long, default_value = "3")]
        max_attempts: u32,
    },

    /// Run a persisted routine against a PDF and emit CSV
    Parse {
        /// Target bank key the routine was built for
        #[arg(value_name = "TARGET")]
        target: String,

        /// Path to the statement PDF
        #[arg(value_name = "PDF")]
        pdf: PathBuf,

        /// Routine artifact path (default: routines/<TARGET>.routine.json)
        #[arg(short, long)]
        routine: Option<PathBuf>,

        /// Output CSV path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show a persisted routine's schema and mapping rules
    Inspect {
        /// Target bank key the routine was built for
        #[arg(value_name = "TARGET")]
        target: String,

        /// Routine artifact path (default: routines/<TARGET>.routine.json)
        #[arg(short, long)]
        routine: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
