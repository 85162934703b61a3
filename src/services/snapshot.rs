use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::Result;
use log::info;

use crate::api::NhlStatsClient;
use crate::config::rookies::RookieRoster;
use crate::config::settings::{AppConfig, ReportSettings};
use crate::domain::models::{GoalieSummary, Season, SkaterSummary, TeamSummary};
use crate::pipeline::{merge, ranking, rookies};
use crate::report::records::{GoalieRecord, Report, SkaterEntry, SkaterRecord, TeamRecord};
use crate::report::writer;

pub struct SnapshotOptions {
    pub primary: Season,
    pub merge: Option<Season>,
    pub output: PathBuf,
    pub roster: RookieRoster,
}

/// Raw endpoint collections; all fetched before any transformation runs
pub struct SourceData {
    pub skaters: Vec<SkaterSummary>,
    pub merge_skaters: Option<Vec<SkaterSummary>>,
    pub teams: Vec<TeamSummary>,
    pub goalies: Vec<GoalieSummary>,
}

pub struct SnapshotService {
    config: AppConfig,
    options: SnapshotOptions,
    client: NhlStatsClient,
}

impl SnapshotService {
    pub fn new(config: AppConfig, options: SnapshotOptions) -> Result<Self> {
        let client = NhlStatsClient::new(&config.api)?;
        Ok(Self {
            config,
            options,
            client,
        })
    }

    pub async fn run(&self) -> Result<()> {
        info!("=== Starting Stats Snapshot ===\n");

        // Any fetch failure aborts here, before the output file is touched.
        let sources = self.fetch_sources().await?;
        info!(
            "  → Fetched {} skaters, {} teams, {} goalies\n",
            sources.skaters.len(),
            sources.teams.len(),
            sources.goalies.len()
        );

        let report = build_report(
            &sources,
            &self.options.roster,
            self.options.primary,
            self.options.merge,
            &self.config.report,
        );
        info!("  → Assembled report\n");

        writer::write_report(&report, &self.options.output)?;
        info!("=== Snapshot Complete ===");

        println!(
            "Filtered NHL stats saved to {}",
            self.options.output.display()
        );
        Ok(())
    }

    async fn fetch_sources(&self) -> Result<SourceData> {
        info!("Step 1: Fetching season summaries...");

        let skaters = self.client.fetch_skater_summary(self.options.primary).await?;

        let merge_skaters = match self.options.merge {
            Some(season) => Some(self.client.fetch_skater_summary(season).await?),
            None => None,
        };

        let teams = self.client.fetch_team_summary(self.options.primary).await?;
        let goalies = self.client.fetch_goalie_summary(self.options.primary).await?;

        Ok(SourceData {
            skaters,
            merge_skaters,
            teams,
            goalies,
        })
    }
}

/// Pure report assembly over already-fetched collections.
/// Ranking always uses primary-season points; the merge season only
/// enriches the selected records.
pub fn build_report(
    sources: &SourceData,
    roster: &RookieRoster,
    primary: Season,
    merge_season: Option<Season>,
    settings: &ReportSettings,
) -> Report {
    let defender_pool = ranking::top_defenders(&sources.skaters, settings.defender_pool);
    let forward_pool = ranking::top_forwards(&sources.skaters, settings.forward_pool);
    let rookie_pool = rookies::resolve_roster(roster, &sources.skaters);

    let (defenders, forwards, top_rookies) = match (&sources.merge_skaters, merge_season) {
        (Some(secondary), Some(season)) => {
            let lookup = merge::name_lookup(secondary);
            (
                project_merged(&defender_pool, settings.defender_limit, &lookup, primary, season),
                project_merged(&forward_pool, settings.forward_limit, &lookup, primary, season),
                project_merged(&rookie_pool, rookie_pool.len(), &lookup, primary, season),
            )
        }
        _ => (
            project_single(&defender_pool, settings.defender_limit),
            project_single(&forward_pool, settings.forward_limit),
            project_single(&rookie_pool, rookie_pool.len()),
        ),
    };

    let teams = ranking::rank_teams(&sources.teams)
        .iter()
        .map(TeamRecord::from_summary)
        .collect();

    let top_50_goalies =
        ranking::top_goalies(&sources.goalies, settings.goalie_min_games, settings.goalie_pool)
            .iter()
            .map(GoalieRecord::from_summary)
            .collect();

    Report {
        top_50_defenders: defenders,
        top_100_offensive_players: forwards,
        top_rookies,
        teams,
        top_50_goalies,
    }
}

fn project_single(pool: &[SkaterSummary], limit: usize) -> Vec<SkaterEntry> {
    pool.iter()
        .take(limit)
        .map(|s| SkaterEntry::Single(SkaterRecord::from_summary(s)))
        .collect()
}

fn project_merged(
    pool: &[SkaterSummary],
    limit: usize,
    lookup: &HashMap<String, &SkaterSummary>,
    primary: Season,
    secondary: Season,
) -> Vec<SkaterEntry> {
    pool.iter()
        .take(limit)
        .map(|s| SkaterEntry::Merged(merge::merge_skater(s, lookup, primary, secondary)))
        .collect()
}
