//! Team names and the built-in allow-list.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Schools tracked by `hometowns` when no `--teams` override is given.
pub const DEFAULT_TEAMS: &[&str] = &[
    "Wisconsin",
    "Oregon",
    "Utah",
    "USC",
    "Texas A&M",
    "North Carolina State",
    "Texas",
    "Minnesota",
    "Kentucky",
    "Kansas State",
    "Miami (FL)",
    "Florida",
    "Florida State",
    "West Virginia",
    "Auburn",
    "Wake Forest",
    "Tennessee",
    "Pitt",
    "Ole Miss",
    "Washington State",
    "Missouri",
    "Louisville",
    "Mississippi State",
    "Virginia Tech",
    "Iowa State",
    "Michigan State",
    "Buffalo",
    "North Carolina",
    "Boston College",
    "Northwestern",
    "Stanford",
    "South Carolina",
    "UCLA",
    "Baylor",
    "Arizona State",
    "Texas Tech",
    "Duke",
    "Maryland",
    "California",
    "Georgia Tech",
    "Virginia",
    "Indiana",
    "Colorado",
    "Syracuse",
    "Oregon State",
    "Nebraska",
    "Arkansas",
    "Illinois",
    "Arizona",
    "Vanderbilt",
    "Rutgers",
    "Kansas",
];

/// Canonical team name as the roster API spells it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Team(String);

impl Team {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The built-in allow-list, in its declared order.
    pub fn defaults() -> Vec<Team> {
        DEFAULT_TEAMS.iter().copied().map(Team::new).collect()
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Team {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_defaults_are_unique() {
        let teams = Team::defaults();
        let unique: HashSet<_> = teams.iter().collect();
        assert_eq!(teams.len(), 52);
        assert_eq!(unique.len(), teams.len());
    }

    #[test]
    fn test_team_display_keeps_spelling() {
        assert_eq!(Team::from("Miami (FL)").to_string(), "Miami (FL)");
        assert_eq!(Team::new("Texas A&M").as_str(), "Texas A&M");
    }
}
