use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Curated list of notable first-year skaters for the 2025-26 season.
/// Names are matched case-insensitively; output order follows this list.
const DEFAULT_ROOKIES: &[&str] = &[
    "ivan demidov",
    "michael misa",
    "alexander nikishin",
    "jimmy snuggerud",
    "ryan leonard",
    "zeev buium",
    "zayne parekh",
    "ville koivunen",
    "gabriel perreault",
    "sam dickinson",
    "sam rinzel",
    "james hagens",
    "rutger mcgroarty",
    "matthew savoie",
    "calum ritchie",
    "matthew schaefer",
    "maxim shabanov",
    "anton frondell",
    "brad lambert",
    "artyom levshunov",
    "tij iginla",
    "konsta helenius",
    "cole eiserman",
    "beckett sennecke",
    "axel sandin pellikka",
    "kasper halttunen",
    "daniil but",
    "jordan dumais",
    "fraser minten",
    "matej blumel",
    "oliver moore",
    "nikita prishchepov",
    "isaac howard",
    "liam ohgren",
    "danila yurov",
    "matthew wood",
    "arseny gritsyuk",
    "owen pickering",
    "jani nyman",
    "logan mailloux",
    "justin sourdif",
    "easton cowan",
    "berkly catton",
    "caleb desnoyers",
    "carter yakemchuk",
    "dalibor dvorsky",
    "bradly nadeau",
    "ty mueller",
    "luca cagnoni",
    "quinn hutson",
    "cole hutson",
];

/// Ordered rookie roster; lookups are case-insensitive
#[derive(Debug, Clone)]
pub struct RookieRoster {
    names: Vec<String>,
}

impl RookieRoster {
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    /// Load a roster file: one full name per line, blank lines and
    /// `#` comment lines are skipped. Line order is preserved.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read rookie roster from {}", path.display()))?;

        let names = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
            .collect();

        Ok(Self { names })
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for RookieRoster {
    fn default() -> Self {
        Self::new(DEFAULT_ROOKIES.iter().map(|s| s.to_string()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_roster_size_and_order() {
        let roster = RookieRoster::default();
        assert_eq!(roster.len(), 51);
        assert_eq!(roster.names()[0], "ivan demidov");
        assert_eq!(roster.names()[50], "cole hutson");
    }

    #[test]
    fn test_from_file_skips_blanks_and_comments() {
        let path = std::env::temp_dir().join("rookie_roster_test.txt");
        fs::write(&path, "# 2025-26 watch list\nivan demidov\n\n  test player  \n").unwrap();

        let roster = RookieRoster::from_file(&path).unwrap();
        assert_eq!(roster.names(), &["ivan demidov", "test player"]);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_from_file_missing_is_error() {
        let result = RookieRoster::from_file("no/such/roster.txt");
        assert!(result.is_err());
    }
}
