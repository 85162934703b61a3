use std::collections::HashMap;

use crate::domain::models::{Season, SkaterSummary};
use crate::report::records::MergedSkaterRecord;

/// Lookup from lower-cased full name to skater row
pub fn name_lookup(skaters: &[SkaterSummary]) -> HashMap<String, &SkaterSummary> {
    skaters
        .iter()
        .map(|s| (s.skater_full_name.to_lowercase(), s))
        .collect()
}

/// Merge one primary-season skater with their secondary-season row, matched
/// by lower-cased full name. A player without a secondary row keeps zeroed
/// performance stats and no secondary team.
pub fn merge_skater(
    primary: &SkaterSummary,
    secondary: &HashMap<String, &SkaterSummary>,
    primary_season: Season,
    secondary_season: Season,
) -> MergedSkaterRecord {
    let next = secondary.get(&primary.skater_full_name.to_lowercase());

    MergedSkaterRecord {
        player_id: primary.player_id,
        skater_full_name: primary.skater_full_name.clone(),
        position_code: primary.position_code,
        primary_team: primary.team_abbrevs.clone(),
        secondary_team: next.and_then(|s| s.team_abbrevs.clone()),
        primary_games_played: primary.games_played,
        secondary_games_played: next.map_or(0, |s| s.games_played),
        secondary_goals: next.map_or(0, |s| s.goals),
        secondary_assists: next.map_or(0, |s| s.assists),
        secondary_points: next.map_or(0, |s| s.points),
        primary_label: primary_season.short_label(),
        secondary_label: secondary_season.short_label(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::Position;

    fn skater(name: &str, team: &str, points: i64) -> SkaterSummary {
        SkaterSummary {
            player_id: Some(42),
            skater_full_name: name.to_string(),
            team_abbrevs: Some(team.to_string()),
            position_code: Some(Position::C),
            games_played: 82,
            goals: points / 2,
            assists: points - points / 2,
            points,
        }
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let skaters = vec![skater("Nathan MacKinnon", "COL", 116)];
        let lookup = name_lookup(&skaters);

        assert!(lookup.contains_key("nathan mackinnon"));
        assert!(!lookup.contains_key("Nathan MacKinnon"));
    }

    #[test]
    fn test_merge_carries_both_season_blocks() {
        let primary = skater("Nathan MacKinnon", "COL", 116);
        let secondary_rows = vec![skater("NATHAN MACKINNON", "COL", 30)];
        let lookup = name_lookup(&secondary_rows);

        let merged = merge_skater(&primary, &lookup, Season(20242025), Season(20252026));

        assert_eq!(merged.primary_games_played, 82);
        assert_eq!(merged.secondary_points, 30);
        assert_eq!(merged.secondary_team.as_deref(), Some("COL"));
        assert_eq!(merged.primary_label, "202425");
        assert_eq!(merged.secondary_label, "202526");
    }

    #[test]
    fn test_missing_secondary_row_defaults_to_zero() {
        let primary = skater("Departed Veteran", "CHI", 55);
        let lookup = name_lookup(&[]);

        let merged = merge_skater(&primary, &lookup, Season(20242025), Season(20252026));

        assert_eq!(merged.player_id, Some(42));
        assert_eq!(merged.primary_team.as_deref(), Some("CHI"));
        assert_eq!(merged.secondary_team, None);
        assert_eq!(merged.secondary_games_played, 0);
        assert_eq!(merged.secondary_goals, 0);
        assert_eq!(merged.secondary_assists, 0);
        assert_eq!(merged.secondary_points, 0);
    }
}
