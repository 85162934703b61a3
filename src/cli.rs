use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "NHL filtered stats snapshot")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Fetch season stats from the NHL API and write the filtered snapshot
    Snapshot {
        /// Primary season id (8 digits, e.g. 20242025)
        #[arg(short, long, default_value_t = 20242025)]
        season: u32,
        /// Second season id whose stats are merged onto the primary rankings
        #[arg(short, long)]
        merge_season: Option<u32>,
        /// Output file path
        #[arg(short, long, default_value = "nhl_filtered_stats.json")]
        output: PathBuf,
        /// Rookie roster file, one full name per line (built-in list when omitted)
        #[arg(short, long)]
        rookies: Option<PathBuf>,
    },
}
