use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

use crate::domain::models::{GoalieSummary, Position, SkaterSummary, TeamSummary};

/// Derived goalie scoring metric: wins and shutouts dominate, overtime
/// losses and assists count once.
pub fn goalie_points(wins: i64, ot_losses: i64, assists: i64, shutouts: i64) -> i64 {
    wins * 2 + ot_losses + assists + shutouts * 5
}

/// Skater output row; only these eight fields may appear in the report
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkaterRecord {
    pub player_id: Option<i64>,
    pub skater_full_name: String,
    pub team_abbrevs: Option<String>,
    pub position_code: Option<Position>,
    pub games_played: i64,
    pub goals: i64,
    pub assists: i64,
    pub points: i64,
}

impl SkaterRecord {
    pub fn from_summary(summary: &SkaterSummary) -> Self {
        Self {
            player_id: summary.player_id,
            skater_full_name: summary.skater_full_name.clone(),
            team_abbrevs: summary.team_abbrevs.clone(),
            position_code: summary.position_code,
            games_played: summary.games_played,
            goals: summary.goals,
            assists: summary.assists,
            points: summary.points,
        }
    }
}

/// Two-season skater output row. Field names carry the season labels
/// (e.g. `gamesPlayed_202425`), so serialization builds the map by hand.
#[derive(Debug, Clone)]
pub struct MergedSkaterRecord {
    pub player_id: Option<i64>,
    pub skater_full_name: String,
    pub position_code: Option<Position>,
    pub primary_team: Option<String>,
    pub secondary_team: Option<String>,
    pub primary_games_played: i64,
    pub secondary_games_played: i64,
    pub secondary_goals: i64,
    pub secondary_assists: i64,
    pub secondary_points: i64,
    pub primary_label: String,
    pub secondary_label: String,
}

impl Serialize for MergedSkaterRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(10))?;
        map.serialize_entry("playerId", &self.player_id)?;
        map.serialize_entry("skaterFullName", &self.skater_full_name)?;
        map.serialize_entry(
            &format!("teamAbbrevs_{}", self.primary_label),
            &self.primary_team,
        )?;
        map.serialize_entry(
            &format!("teamAbbrevs_{}", self.secondary_label),
            &self.secondary_team,
        )?;
        map.serialize_entry("positionCode", &self.position_code)?;
        map.serialize_entry(
            &format!("gamesPlayed_{}", self.primary_label),
            &self.primary_games_played,
        )?;
        map.serialize_entry(
            &format!("gamesPlayed_{}", self.secondary_label),
            &self.secondary_games_played,
        )?;
        map.serialize_entry(
            &format!("goals_{}", self.secondary_label),
            &self.secondary_goals,
        )?;
        map.serialize_entry(
            &format!("assists_{}", self.secondary_label),
            &self.secondary_assists,
        )?;
        map.serialize_entry(
            &format!("points_{}", self.secondary_label),
            &self.secondary_points,
        )?;
        map.end()
    }
}

/// Either output shape for a skater collection, depending on whether a
/// merge season was configured
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum SkaterEntry {
    Single(SkaterRecord),
    Merged(MergedSkaterRecord),
}

/// Goalie output row, including the derived points metric
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalieRecord {
    pub player_id: Option<i64>,
    pub goalie_full_name: String,
    pub team_abbrevs: Option<String>,
    pub games_played: i64,
    pub wins: i64,
    pub losses: i64,
    pub ot_losses: i64,
    pub save_pct: f64,
    pub assists: i64,
    pub shutouts: i64,
    pub points: i64,
}

impl GoalieRecord {
    pub fn from_summary(summary: &GoalieSummary) -> Self {
        Self {
            player_id: summary.player_id,
            goalie_full_name: summary.goalie_full_name.clone(),
            team_abbrevs: summary.team_abbrevs.clone(),
            games_played: summary.games_played,
            wins: summary.wins,
            losses: summary.losses,
            ot_losses: summary.ot_losses,
            save_pct: summary.save_pct,
            assists: summary.assists,
            shutouts: summary.shutouts,
            points: goalie_points(
                summary.wins,
                summary.ot_losses,
                summary.assists,
                summary.shutouts,
            ),
        }
    }
}

/// Team output row
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamRecord {
    pub games_played: i64,
    pub wins: i64,
    pub losses: i64,
    pub ot_losses: i64,
    pub points: i64,
    pub team_full_name: String,
    pub team_id: Option<i64>,
    pub season_id: Option<i64>,
}

impl TeamRecord {
    pub fn from_summary(summary: &TeamSummary) -> Self {
        Self {
            games_played: summary.games_played,
            wins: summary.wins,
            losses: summary.losses,
            ot_losses: summary.ot_losses,
            points: summary.points,
            team_full_name: summary.team_full_name.clone(),
            team_id: summary.team_id,
            season_id: summary.season_id,
        }
    }
}

/// The snapshot document: exactly these five keys, in this order
#[derive(Debug, Serialize)]
pub struct Report {
    #[serde(rename = "Top_50_Defenders")]
    pub top_50_defenders: Vec<SkaterEntry>,
    #[serde(rename = "Top_100_Offensive_Players")]
    pub top_100_offensive_players: Vec<SkaterEntry>,
    #[serde(rename = "Top_Rookies")]
    pub top_rookies: Vec<SkaterEntry>,
    #[serde(rename = "Teams")]
    pub teams: Vec<TeamRecord>,
    #[serde(rename = "Top_50_Goalies")]
    pub top_50_goalies: Vec<GoalieRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_keys(value: &serde_json::Value) -> Vec<String> {
        value
            .as_object()
            .expect("record should serialize to an object")
            .keys()
            .cloned()
            .collect()
    }

    #[test]
    fn test_goalie_points_formula() {
        // 2*10 + 2 + 3 + 5*1
        assert_eq!(goalie_points(10, 2, 3, 1), 30);
        assert_eq!(goalie_points(0, 0, 0, 0), 0);
    }

    #[test]
    fn test_skater_record_field_allow_list() {
        let record = SkaterRecord {
            player_id: Some(1),
            skater_full_name: "Cale Makar".to_string(),
            team_abbrevs: Some("COL".to_string()),
            position_code: Some(Position::D),
            games_played: 80,
            goals: 30,
            assists: 62,
            points: 92,
        };

        let value = serde_json::to_value(&record).unwrap();
        let mut keys = record_keys(&value);
        keys.sort();

        assert_eq!(
            keys,
            [
                "assists",
                "gamesPlayed",
                "goals",
                "playerId",
                "points",
                "positionCode",
                "skaterFullName",
                "teamAbbrevs",
            ]
        );
        assert_eq!(value["positionCode"], "D");
    }

    #[test]
    fn test_merged_record_keys_carry_season_labels() {
        let record = MergedSkaterRecord {
            player_id: Some(1),
            skater_full_name: "Nathan MacKinnon".to_string(),
            position_code: Some(Position::C),
            primary_team: Some("COL".to_string()),
            secondary_team: Some("COL".to_string()),
            primary_games_played: 79,
            secondary_games_played: 20,
            secondary_goals: 10,
            secondary_assists: 18,
            secondary_points: 28,
            primary_label: "202425".to_string(),
            secondary_label: "202526".to_string(),
        };

        let value = serde_json::to_value(&record).unwrap();
        let mut keys = record_keys(&value);
        keys.sort();

        assert_eq!(
            keys,
            [
                "assists_202526",
                "gamesPlayed_202425",
                "gamesPlayed_202526",
                "goals_202526",
                "playerId",
                "points_202526",
                "positionCode",
                "skaterFullName",
                "teamAbbrevs_202425",
                "teamAbbrevs_202526",
            ]
        );
        assert_eq!(value["points_202526"], 28);
    }

    #[test]
    fn test_goalie_record_field_allow_list() {
        let summary = GoalieSummary {
            player_id: Some(2),
            goalie_full_name: "Connor Hellebuyck".to_string(),
            team_abbrevs: Some("WPG".to_string()),
            games_played: 60,
            wins: 10,
            losses: 20,
            ot_losses: 2,
            save_pct: 0.925,
            assists: 3,
            shutouts: 1,
        };

        let record = GoalieRecord::from_summary(&summary);
        assert_eq!(record.points, 30);

        let value = serde_json::to_value(&record).unwrap();
        let mut keys = record_keys(&value);
        keys.sort();

        assert_eq!(
            keys,
            [
                "assists",
                "gamesPlayed",
                "goalieFullName",
                "losses",
                "otLosses",
                "playerId",
                "points",
                "savePct",
                "shutouts",
                "teamAbbrevs",
                "wins",
            ]
        );
    }

    #[test]
    fn test_team_record_field_allow_list() {
        let summary = TeamSummary {
            team_id: Some(10),
            team_full_name: "Toronto Maple Leafs".to_string(),
            season_id: Some(20242025),
            games_played: 82,
            wins: 52,
            losses: 26,
            ot_losses: 4,
            points: 108,
        };

        let value = serde_json::to_value(TeamRecord::from_summary(&summary)).unwrap();
        let mut keys = record_keys(&value);
        keys.sort();

        assert_eq!(
            keys,
            [
                "gamesPlayed",
                "losses",
                "otLosses",
                "points",
                "seasonId",
                "teamFullName",
                "teamId",
                "wins",
            ]
        );
    }

    #[test]
    fn test_report_has_exactly_five_keys() {
        let report = Report {
            top_50_defenders: vec![],
            top_100_offensive_players: vec![],
            top_rookies: vec![],
            teams: vec![],
            top_50_goalies: vec![],
        };

        let value = serde_json::to_value(&report).unwrap();
        let keys = record_keys(&value);

        assert_eq!(
            keys,
            [
                "Top_50_Defenders",
                "Top_100_Offensive_Players",
                "Top_Rookies",
                "Teams",
                "Top_50_Goalies",
            ]
        );
    }
}
