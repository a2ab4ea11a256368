//! In-memory aggregation of player records into per-team rosters.
//!
//! Records are folded into a [`TeamRoster`] keyed by player identity. The
//! first sighting of an identity fixes its position in the roster; later
//! sightings only update the derived attributes, as defined by the
//! [`PlayerAttributes`] implementation in use.

pub mod attributes;

use std::collections::{HashMap, HashSet};

use tracing::debug;

pub use attributes::{Hometown, PlayerAttributes, Tenure};

use crate::cfbd::PlayerRecord;
use crate::{Season, Team};


/// Insertion-ordered, identity-unique mapping of players to attributes.
#[derive(Debug, Clone)]
pub struct TeamRoster<A> {
    entries: Vec<(String, A)>,
    index: HashMap<String, usize>,
}

impl<A> Default for TeamRoster<A> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<A: PlayerAttributes> TeamRoster<A> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one record in. Returns `true` when the identity was new.
    pub fn observe(&mut self, record: &PlayerRecord, season: Season) -> bool {
        let identity = record.identity();
        match self.index.get(&identity) {
            Some(&slot) => {
                self.entries[slot].1.seen_again(record, season);
                false
            }
            None => {
                self.index.insert(identity.clone(), self.entries.len());
                self.entries
                    .push((identity, A::first_sighting(record, season)));
                true
            }
        }
    }

    pub fn get(&self, identity: &str) -> Option<&A> {
        self.index.get(identity).map(|&slot| &self.entries[slot].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Players in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &A)> {
        self.entries.iter().map(|(name, attrs)| (name.as_str(), attrs))
    }
}

/// Per-team rosters for one run, in team registration order.
#[derive(Debug, Clone)]
pub struct RosterAggregator<A> {
    rosters: Vec<(Team, TeamRoster<A>)>,
    index: HashMap<Team, usize>,
    tracked: Option<HashSet<Team>>,
}

impl<A> Default for RosterAggregator<A> {
    fn default() -> Self {
        Self {
            rosters: Vec::new(),
            index: HashMap::new(),
            tracked: None,
        }
    }
}

impl<A: PlayerAttributes> RosterAggregator<A> {
    /// Accepts records for any team.
    pub fn new() -> Self {
        Self::default()
    }

    /// Only accepts bulk records for `teams`; every team gets a roster up
    /// front, so teams that never show up are still reported at export.
    pub fn tracking(teams: impl IntoIterator<Item = Team>) -> Self {
        let mut aggregator = Self::default();
        let mut tracked = HashSet::new();
        for team in teams {
            aggregator.track(team.clone());
            tracked.insert(team);
        }
        aggregator.tracked = Some(tracked);
        aggregator
    }

    /// Register `team` without adding players.
    pub fn track(&mut self, team: Team) {
        self.roster_mut(team);
    }

    pub fn is_tracked(&self, team: &str) -> bool {
        match &self.tracked {
            Some(tracked) => tracked.contains(&Team::new(team)),
            None => true,
        }
    }

    /// Attribute every record to `team`. Used for per-team requests where
    /// the response only holds that team's players.
    pub fn ingest(&mut self, team: &Team, season: Season, records: &[PlayerRecord]) -> usize {
        let roster = self.roster_mut(team.clone());
        for record in records {
            roster.observe(record, season);
        }
        debug!(%team, %season, records = records.len(), "Ingested roster");
        records.len()
    }

    /// Group a multi-team response by each record's own `team` field,
    /// discarding teams that are not tracked. Returns the records kept.
    pub fn ingest_bulk(&mut self, season: Season, records: &[PlayerRecord]) -> usize {
        let mut accepted = 0;
        for record in records {
            if !self.is_tracked(record.team()) {
                continue;
            }
            self.roster_mut(Team::new(record.team()))
                .observe(record, season);
            accepted += 1;
        }
        debug!(%season, received = records.len(), accepted, "Ingested bulk roster");
        accepted
    }

    pub fn roster(&self, team: &Team) -> Option<&TeamRoster<A>> {
        self.index.get(team).map(|&slot| &self.rosters[slot].1)
    }

    pub fn teams(&self) -> impl Iterator<Item = &Team> {
        self.rosters.iter().map(|(team, _)| team)
    }

    /// Teams and their rosters in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&Team, &TeamRoster<A>)> {
        self.rosters.iter().map(|(team, roster)| (team, roster))
    }

    fn roster_mut(&mut self, team: Team) -> &mut TeamRoster<A> {
        let slot = match self.index.get(&team) {
            Some(&slot) => slot,
            None => {
                let slot = self.rosters.len();
                self.index.insert(team.clone(), slot);
                self.rosters.push((team, TeamRoster::new()));
                slot
            }
        };
        &mut self.rosters[slot].1
    }
}
