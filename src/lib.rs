pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod http;
pub mod pipeline;
pub mod report;
pub mod services;

use std::path::Path;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

use crate::cli::Command;
use crate::config::rookies::RookieRoster;
use crate::config::settings::AppConfig;
use crate::domain::Season;
use crate::services::snapshot::{SnapshotOptions, SnapshotService};

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_snapshot(
    season: u32,
    merge_season: Option<u32>,
    output: &Path,
    rookies: Option<&Path>,
) -> Result<()> {
    let roster = match rookies {
        Some(path) => RookieRoster::from_file(path)?,
        None => RookieRoster::default(),
    };

    let options = SnapshotOptions {
        primary: Season(season),
        merge: merge_season.map(Season),
        output: output.to_path_buf(),
        roster,
    };

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        let service = SnapshotService::new(config, options)?;
        service.run().await
    })
}
