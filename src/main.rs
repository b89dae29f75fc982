use clap::Parser;
use colored::*;
use duress::cli::{Cli, Commands};
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    // Initialize logging with DURESS_LOG environment variable support
    let log_level = std::env::var("DURESS_LOG").unwrap_or_else(|_| "warn".to_string());

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(outcome) => process::exit(outcome.code as i32),
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);

            // Use appropriate exit codes based on error type
            let exit_code = match e.downcast_ref::<duress::DuressError>() {
                Some(duress::DuressError::Config(_)) => 2,
                Some(duress::DuressError::Io(_)) => 3,
                Some(duress::DuressError::MemoryExhausted { .. }) => 4,
                Some(duress::DuressError::WorkerPanic(_)) => 5,
                _ => 1,
            };
            process::exit(exit_code);
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<duress::ExitOutcome> {
    let ctx = duress::cli::commands::CommandContext::from_cli(&cli)?;

    match cli.command {
        Commands::Wait(args) => duress::cli::commands::wait::run(args, &ctx),
        Commands::Burn(args) => duress::cli::commands::burn::run(args, &ctx),
        Commands::Spike(args) => duress::cli::commands::spike::run(args, &ctx),
        Commands::Churn(args) => duress::cli::commands::churn::run(args, &ctx),
        Commands::ExitWith(args) => duress::cli::commands::exit::run(args, &ctx),
        Commands::Probe(args) => duress::cli::commands::probe::run(args, &ctx),
    }
}
