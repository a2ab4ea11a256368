//! Type-safe wrappers for teams and seasons.

pub mod team;
pub mod time;

pub use team::{Team, DEFAULT_TEAMS};
pub use time::{Season, DEFAULT_END_SEASON, DEFAULT_START_SEASON};
