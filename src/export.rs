//! Writes aggregated rosters as one CSV file per team.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{error, info, warn};

use crate::roster::{PlayerAttributes, RosterAggregator, TeamRoster};
use crate::{Result, Team};


/// Leading column holding the player identity.
pub const PLAYER_COLUMN: &str = "Player";

/// Row-oriented projection of a [`TeamRoster`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RosterTable {
    pub fn from_roster<A: PlayerAttributes>(roster: &TeamRoster<A>) -> Self {
        let headers = std::iter::once(PLAYER_COLUMN)
            .chain(A::HEADERS.iter().copied())
            .map(str::to_string)
            .collect();

        let rows = roster
            .iter()
            .map(|(name, attrs)| {
                let mut row = Vec::with_capacity(1 + A::HEADERS.len());
                row.push(name.to_string());
                row.extend(attrs.cells());
                row
            })
            .collect();

        Self { headers, rows }
    }

    /// Serialize as CSV into any writer.
    pub fn write_csv<W: std::io::Write>(&self, writer: W) -> Result<()> {
        let mut csv = csv::Writer::from_writer(writer);
        csv.write_record(&self.headers)?;
        for row in &self.rows {
            csv.write_record(row)?;
        }
        csv.flush()?;
        Ok(())
    }
}

/// `"North Carolina State"` -> `"North_Carolina_State_Roster.csv"`
///
/// Path separators become underscores and leading dots are dropped, so the
/// file always lands directly inside the output directory.
pub fn roster_file_name(team: &Team) -> String {
    let stem: String = team
        .as_str()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' => '_',
            c if c.is_whitespace() => '_',
            c => c,
        })
        .collect();
    let stem = stem.trim_start_matches('.');
    let stem = if stem.is_empty() { "Team" } else { stem };
    format!("{stem}_Roster.csv")
}

/// Write one team's roster into `dir`, replacing any earlier file.
///
/// Returns `Ok(None)` without touching the filesystem when the roster is empty.
pub fn export_roster<A: PlayerAttributes>(
    dir: &Path,
    team: &Team,
    roster: &TeamRoster<A>,
) -> Result<Option<PathBuf>> {
    if roster.is_empty() {
        warn!("No data available for {team}");
        return Ok(None);
    }

    fs::create_dir_all(dir)?;
    let path = dir.join(roster_file_name(team));
    let file = fs::File::create(&path)?;
    RosterTable::from_roster(roster).write_csv(std::io::BufWriter::new(file))?;

    info!(%team, players = roster.len(), path = %path.display(), "Saved roster");
    Ok(Some(path))
}

/// Export every team in registration order. Returns the files written.
///
/// A team whose file cannot be written is logged and skipped; the rest are
/// still exported.
pub fn export_all<A: PlayerAttributes>(dir: &Path, aggregator: &RosterAggregator<A>) -> Vec<PathBuf> {
    let mut written = Vec::new();
    for (team, roster) in aggregator.iter() {
        match export_roster(dir, team, roster) {
            Ok(Some(path)) => {
                println!("Saved {team} roster to {}", path.display());
                written.push(path);
            }
            Ok(None) => {}
            Err(e) => error!(%team, error = %e, "Failed to save roster"),
        }
    }
    written
}
