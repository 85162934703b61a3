use std::fmt;

use serde::{Deserialize, Serialize};

/// Two-year season identifier, e.g. 20242025
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Season(pub u32);

impl Season {
    /// Short form used in merged field names: 20242025 -> "202425"
    pub fn short_label(&self) -> String {
        let full = format!("{:08}", self.0);
        format!("{}{}", &full[..4], &full[6..])
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Skater position code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Position {
    C,
    L,
    R,
    D,
}

impl Position {
    pub fn is_forward(&self) -> bool {
        matches!(self, Position::C | Position::L | Position::R)
    }

    pub fn is_defense(&self) -> bool {
        matches!(self, Position::D)
    }
}

/// Top-level envelope returned by every summary endpoint.
/// The explicit default path keeps the derived impl free of a `T: Default`
/// bound, which the row types do not implement.
#[derive(Debug, Deserialize)]
pub struct SummaryResponse<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

/// One skater row from the skater summary endpoint.
/// Numeric stats default to 0 and identity fields to None when absent.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkaterSummary {
    #[serde(default)]
    pub player_id: Option<i64>,
    #[serde(default)]
    pub skater_full_name: String,
    #[serde(default)]
    pub team_abbrevs: Option<String>,
    #[serde(default)]
    pub position_code: Option<Position>,
    #[serde(default)]
    pub games_played: i64,
    #[serde(default)]
    pub goals: i64,
    #[serde(default)]
    pub assists: i64,
    #[serde(default)]
    pub points: i64,
}

/// One goalie row from the goalie summary endpoint
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalieSummary {
    #[serde(default)]
    pub player_id: Option<i64>,
    #[serde(default)]
    pub goalie_full_name: String,
    #[serde(default)]
    pub team_abbrevs: Option<String>,
    #[serde(default)]
    pub games_played: i64,
    #[serde(default)]
    pub wins: i64,
    #[serde(default)]
    pub losses: i64,
    #[serde(default)]
    pub ot_losses: i64,
    #[serde(default)]
    pub save_pct: f64,
    #[serde(default)]
    pub assists: i64,
    #[serde(default)]
    pub shutouts: i64,
}

/// One team row from the team summary endpoint
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSummary {
    #[serde(default)]
    pub team_id: Option<i64>,
    #[serde(default)]
    pub team_full_name: String,
    #[serde(default)]
    pub season_id: Option<i64>,
    #[serde(default)]
    pub games_played: i64,
    #[serde(default)]
    pub wins: i64,
    #[serde(default)]
    pub losses: i64,
    #[serde(default)]
    pub ot_losses: i64,
    #[serde(default)]
    pub points: i64,
}
