//! Per-player attributes derived while aggregating.

use serde::Serialize;

use crate::cfbd::PlayerRecord;
use crate::Season;

/// How a player's derived columns start out and evolve across sightings.
pub trait PlayerAttributes: Sized {
    /// Column names after the leading `Player` column.
    const HEADERS: &'static [&'static str];

    fn first_sighting(record: &PlayerRecord, season: Season) -> Self;

    fn seen_again(&mut self, record: &PlayerRecord, season: Season);

    /// Cell values in [`Self::HEADERS`] order.
    fn cells(&self) -> Vec<String>;
}

/// Home location; the first sighting wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hometown {
    pub home_city: String,
    pub home_state: String,
}

impl PlayerAttributes for Hometown {
    const HEADERS: &'static [&'static str] = &["Home City", "Home State"];

    fn first_sighting(record: &PlayerRecord, _season: Season) -> Self {
        Self {
            home_city: record.home_city().to_string(),
            home_state: record.home_state().to_string(),
        }
    }

    fn seen_again(&mut self, _record: &PlayerRecord, _season: Season) {}

    fn cells(&self) -> Vec<String> {
        vec![self.home_city.clone(), self.home_state.clone()]
    }
}

/// Span of seasons a player appeared on the roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Tenure {
    pub start_year: Season,
    pub end_year: Season,
}

impl PlayerAttributes for Tenure {
    const HEADERS: &'static [&'static str] = &["Start Year", "End Year"];

    fn first_sighting(_record: &PlayerRecord, season: Season) -> Self {
        Self {
            start_year: season,
            end_year: season,
        }
    }

    fn seen_again(&mut self, _record: &PlayerRecord, season: Season) {
        self.start_year = self.start_year.min(season);
        self.end_year = self.end_year.max(season);
    }

    fn cells(&self) -> Vec<String> {
        vec![self.start_year.to_string(), self.end_year.to_string()]
    }
}
