//! Run command - the generate-validate-retry loop for one target.

use std::path::PathBuf;

use colored::Colorize;
use ledgersmith::{Agent, discover};

pub fn run(
    target: String,
    data_dir: Option<PathBuf>,
    max_attempts: u32,
    verbose: bool,
) -> Result<i32, Box<dyn std::error::Error>> {
    let plan = discover(&target, data_dir.as_deref())?;

    if verbose {
        println!("{}", "Plan:".yellow().bold());
        println!("  target     {}", plan.target);
        println!("  sample     {}", plan.pdf_path.display());
        println!("  reference  {}", plan.reference_path.display());
        println!("  routine    {}", plan.routine_path.display());
        println!();
    }

    let mut agent = Agent::new();
    let outcome = agent.run(&plan, max_attempts, |report| {
        if report.result.passed {
            println!("Attempt {}: {}", report.attempt, "PASS".green().bold());
        } else {
            println!(
                "Attempt {}: {} -> {}",
                report.attempt,
                "FAIL".red().bold(),
                report.result.debug_blob()
            );
        }
    })?;

    if !outcome.passed {
        println!("Max attempts reached without success.");
    }

    Ok(outcome.exit_code())
}
