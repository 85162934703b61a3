use anyhow::{Context, Result, bail};
use log::info;
use serde::de::DeserializeOwned;

use crate::config::settings::ApiSettings;
use crate::domain::models::{GoalieSummary, Season, SkaterSummary, SummaryResponse, TeamSummary};
use crate::errors::{fetch_context, parse_context};
use crate::http::StatsHttpClient;

const SKATER_SUMMARY_PATH: &str = "skater/summary";
const TEAM_SUMMARY_PATH: &str = "team/summary";
const GOALIE_SUMMARY_PATH: &str = "goalie/summary";

/// All summary endpoints take an unbounded limit; paging is never needed.
const UNBOUNDED_LIMIT: &str = "-1";

/// Render the server-side filter expression for one season
pub fn build_cayenne_exp(season: Season, game_type_id: u32) -> String {
    format!("seasonId={} and gameTypeId={}", season, game_type_id)
}

/// NHL stats API client
pub struct NhlStatsClient {
    client: StatsHttpClient,
    base_url: &'static str,
    game_type_id: u32,
}

impl NhlStatsClient {
    /// Create a new NHL stats API client
    pub fn new(settings: &ApiSettings) -> Result<Self> {
        let client = StatsHttpClient::new(settings.user_agent, settings.timeout_secs)?;
        Ok(Self {
            client,
            base_url: settings.base_url,
            game_type_id: settings.game_type_id,
        })
    }

    /// Fetch all skater rows for a season
    pub async fn fetch_skater_summary(&self, season: Season) -> Result<Vec<SkaterSummary>> {
        self.fetch_summary(SKATER_SUMMARY_PATH, season).await
    }

    /// Fetch all team rows for a season
    pub async fn fetch_team_summary(&self, season: Season) -> Result<Vec<TeamSummary>> {
        self.fetch_summary(TEAM_SUMMARY_PATH, season).await
    }

    /// Fetch all goalie rows for a season
    pub async fn fetch_goalie_summary(&self, season: Season) -> Result<Vec<GoalieSummary>> {
        self.fetch_summary(GOALIE_SUMMARY_PATH, season).await
    }

    async fn fetch_summary<T: DeserializeOwned>(
        &self,
        path: &str,
        season: Season,
    ) -> Result<Vec<T>> {
        let url = format!("{}/{}", self.base_url, path);
        info!("Fetching {} for season {}", path, season);

        let query = [
            ("limit", UNBOUNDED_LIMIT.to_string()),
            ("cayenneExp", build_cayenne_exp(season, self.game_type_id)),
        ];

        let response = self
            .client
            .get(&url, &query)
            .await
            .with_context(|| fetch_context(&url))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            bail!("{} returned status {}: {}", url, status, body);
        }

        let summary: SummaryResponse<T> = response
            .json()
            .await
            .with_context(|| parse_context(path))?;

        info!("Fetched {} rows from {}", summary.data.len(), path);
        Ok(summary.data)
    }
}
