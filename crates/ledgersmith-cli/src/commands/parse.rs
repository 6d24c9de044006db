//! Parse command - run a persisted routine against a PDF.

use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use colored::Colorize;
use ledgersmith::{PdfExtractor, RoutineRegistry, StatementParser, default_routine_path};

pub fn run(
    target: String,
    pdf: PathBuf,
    routine: Option<PathBuf>,
    output: Option<PathBuf>,
    verbose: bool,
) -> Result<i32, Box<dyn std::error::Error>> {
    let routine_path = routine.unwrap_or_else(|| default_routine_path(&target));

    let mut registry = RoutineRegistry::new();
    let routine = registry.reload(&target, &routine_path, Arc::new(PdfExtractor::new()))?;

    if verbose {
        println!(
            "{} {} ({} columns)",
            "Loaded".cyan().bold(),
            routine_path.display().to_string().white(),
            routine.schema().len()
        );
    }

    let table = routine.parse(&pdf)?;

    match output {
        Some(path) => {
            let file = File::create(&path)
                .map_err(|e| format!("cannot create '{}': {}", path.display(), e))?;
            table.write_csv(file)?;
            println!(
                "{} {} rows to {}",
                "Wrote".green().bold(),
                table.row_count(),
                path.display().to_string().white()
            );
        }
        None => {
            table.write_csv(io::stdout().lock())?;
        }
    }

    Ok(0)
}
