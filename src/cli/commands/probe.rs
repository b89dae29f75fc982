use crate::cli::commands::CommandContext;
use crate::cli::formatter::format_bytes;
use crate::utils::system::HostSnapshot;
use crate::ExitOutcome;
use clap::Args;
use colored::*;

#[derive(Args, Debug)]
pub struct ProbeArgs {
    /// Output format (text, json)
    #[arg(long, default_value = "text")]
    pub format: String,
}

pub fn run(args: ProbeArgs, _ctx: &CommandContext) -> anyhow::Result<ExitOutcome> {
    let snapshot = HostSnapshot::capture();

    match args.format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&snapshot)?),
        _ => {
            println!("{}", "Host Resources".bold());
            println!("  Logical cores:    {}", snapshot.logical_cores);
            println!(
                "  Total memory:     {}",
                format_bytes(snapshot.total_memory_bytes)
            );
            println!(
                "  Available memory: {}",
                format_bytes(snapshot.available_memory_bytes)
            );
            println!("  Temp directory:   {}", snapshot.temp_dir.display());
        }
    }

    Ok(ExitOutcome::success())
}
