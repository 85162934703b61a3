use crate::domain::models::{GoalieSummary, SkaterSummary, TeamSummary};

/// Defenders ranked by points, descending, truncated to the pool size.
/// Sorting is stable, so ties keep the source collection order.
pub fn top_defenders(skaters: &[SkaterSummary], pool: usize) -> Vec<SkaterSummary> {
    let mut defenders: Vec<SkaterSummary> = skaters
        .iter()
        .filter(|s| s.position_code.is_some_and(|p| p.is_defense()))
        .cloned()
        .collect();

    defenders.sort_by(|a, b| b.points.cmp(&a.points));
    defenders.truncate(pool);
    defenders
}

/// Forwards (C, R, L) ranked by points, descending, truncated to the pool size
pub fn top_forwards(skaters: &[SkaterSummary], pool: usize) -> Vec<SkaterSummary> {
    let mut forwards: Vec<SkaterSummary> = skaters
        .iter()
        .filter(|s| s.position_code.is_some_and(|p| p.is_forward()))
        .cloned()
        .collect();

    forwards.sort_by(|a, b| b.points.cmp(&a.points));
    forwards.truncate(pool);
    forwards
}

/// Full league table ranked by points, descending, no truncation
pub fn rank_teams(teams: &[TeamSummary]) -> Vec<TeamSummary> {
    let mut ranked = teams.to_vec();
    ranked.sort_by(|a, b| b.points.cmp(&a.points));
    ranked
}

/// Goalies with at least `min_games` played, ranked by save percentage,
/// descending, truncated to the pool size
pub fn top_goalies(goalies: &[GoalieSummary], min_games: i64, pool: usize) -> Vec<GoalieSummary> {
    let mut retained: Vec<GoalieSummary> = goalies
        .iter()
        .filter(|g| g.games_played >= min_games)
        .cloned()
        .collect();

    retained.sort_by(|a, b| b.save_pct.total_cmp(&a.save_pct));
    retained.truncate(pool);
    retained
}
