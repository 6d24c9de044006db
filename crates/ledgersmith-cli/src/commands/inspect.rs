//! Inspect command - show a persisted routine's schema and mapping rules.

use std::path::PathBuf;

use colored::Colorize;
use ledgersmith::{RoutineSpec, default_routine_path};

pub fn run(
    target: String,
    routine: Option<PathBuf>,
    json: bool,
) -> Result<i32, Box<dyn std::error::Error>> {
    let routine_path = routine.unwrap_or_else(|| default_routine_path(&target));
    let spec = RoutineSpec::load(&routine_path)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&spec)?);
        return Ok(0);
    }

    println!(
        "{} {}",
        "Routine".cyan().bold(),
        routine_path.display().to_string().white()
    );
    println!("  target          {}", spec.target);
    println!("  format version  {}", spec.version);
    println!("  reference hash  {}", spec.reference_hash);
    println!();

    println!("{}", "Expected columns:".yellow().bold());
    for column in &spec.expected_columns {
        println!("  {}", column);
    }
    println!();

    println!("{}", "Keyword buckets:".yellow().bold());
    for bucket in &spec.buckets {
        println!("  {:12} {}", bucket.concept, bucket.keywords.join(", "));
    }

    Ok(0)
}
