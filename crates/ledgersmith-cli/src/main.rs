//! Ledgersmith CLI - statement-parser generator with self-validation.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            target,
            data_dir,
            max_attempts,
        } => commands::run::run(target, data_dir, max_attempts, cli.verbose),

        Commands::Parse {
            target,
            pdf,
            routine,
            output,
        } => commands::parse::run(target, pdf, routine, output, cli.verbose),

        Commands::Inspect {
            target,
            routine,
            json,
        } => commands::inspect::run(target, routine, json),
    };

    match result {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
