use anyhow::Result;

use nhl_filtered_stats::cli::Command;
use nhl_filtered_stats::{handle_snapshot, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Snapshot {
            season,
            merge_season,
            output,
            rookies,
        } => handle_snapshot(*season, *merge_season, output, rookies.as_deref()),
    }
}
