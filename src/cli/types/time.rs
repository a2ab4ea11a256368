//! Season type used as the `year` query parameter.

use crate::error::{Result, RosterError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// First season fetched by `hometowns` when no range is given.
pub const DEFAULT_START_SEASON: Season = Season(2016);

/// Last season (inclusive) fetched by `hometowns` when no range is given.
pub const DEFAULT_END_SEASON: Season = Season(2024);

/// Type-safe wrapper for Season years
///
/// # Examples
///
/// ```rust
/// use cfb_rosters::Season;
///
/// let season: Season = " 2019 ".parse().unwrap();
/// assert_eq!(season, Season::new(2019));
/// assert_eq!(season.to_string(), "2019");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Season(pub u16);

impl Season {
    pub fn new(year: u16) -> Self {
        Self(year)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// Every season from `start` through `end`, inclusive. Empty when `start > end`.
    pub fn range_inclusive(start: Season, end: Season) -> Vec<Season> {
        (start.0..=end.0).map(Season).collect()
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Season {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        trimmed
            .parse()
            .map(Self)
            .map_err(|_| RosterError::InvalidYear {
                input: trimmed.to_string(),
            })
    }
}
