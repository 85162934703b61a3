use crate::config::rookies::RookieRoster;
use crate::domain::models::SkaterSummary;
use crate::pipeline::merge;

/// Resolve every roster name against the fetched skater collection, in
/// roster order. Names missing from the data get a zeroed placeholder so
/// the output always has one entry per roster name.
pub fn resolve_roster(roster: &RookieRoster, skaters: &[SkaterSummary]) -> Vec<SkaterSummary> {
    let lookup = merge::name_lookup(skaters);

    roster
        .names()
        .iter()
        .map(|name| match lookup.get(&name.to_lowercase()) {
            Some(found) => (*found).clone(),
            None => placeholder(name),
        })
        .collect()
}

fn placeholder(name: &str) -> SkaterSummary {
    SkaterSummary {
        player_id: None,
        skater_full_name: title_case(name),
        team_abbrevs: None,
        position_code: None,
        games_played: 0,
        goals: 0,
        assists: 0,
        points: 0,
    }
}

/// Capitalize the first letter of each whitespace-separated word
fn title_case(name: &str) -> String {
    name.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
