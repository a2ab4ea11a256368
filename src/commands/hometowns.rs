//! Hometowns command: one bulk request per season, first-seen home location per player.

use tracing::info;

use crate::{
    cfbd::{Clock, RetryPolicy, RosterQuery, RosterSource, TokioClock, UnitOutcome},
    export::export_all,
    roster::{Hometown, RosterAggregator},
    Result, Season, Team,
};

use super::common::{RunSettings, RunSummary, UnitRunner};

/// Fetch every season and fold the tracked teams' players together.
///
/// Skipped seasons contribute nothing; the remaining seasons still run.
pub async fn collect_hometowns<S, C>(
    source: &S,
    clock: &C,
    policy: RetryPolicy,
    interval: std::time::Duration,
    teams: Vec<Team>,
    seasons: &[Season],
) -> (RosterAggregator<Hometown>, RunSummary)
where
    S: RosterSource,
    C: Clock,
{
    let mut aggregator = RosterAggregator::tracking(teams);
    let mut runner = UnitRunner::new(source, clock, policy, interval);

    for &season in seasons {
        match runner.run(&RosterQuery::season(season)).await {
            UnitOutcome::Data(records) => {
                let kept = aggregator.ingest_bulk(season, &records);
                info!(%season, received = records.len(), kept, "Retrieved all rosters for {season}");
            }
            UnitOutcome::Skipped(reason) => {
                info!(%season, %reason, "No roster data for {season}");
            }
        }
    }

    let summary = runner.summary(Vec::new());
    (aggregator, summary)
}

/// Run the hometowns command end to end and write one file per team.
pub async fn handle_hometowns(
    settings: &RunSettings,
    teams: Vec<Team>,
    seasons: &[Season],
) -> Result<RunSummary> {
    let client = settings.client()?;
    info!(
        teams = teams.len(),
        seasons = seasons.len(),
        base_url = client.base_url(),
        "Starting hometowns run"
    );

    let (aggregator, summary) = collect_hometowns(
        &client,
        &TokioClock,
        settings.retry.clone(),
        settings.request_interval,
        teams,
        seasons,
    )
    .await;

    let files = export_all(&settings.output_dir, &aggregator);
    println!("All rosters downloaded successfully!");

    Ok(RunSummary { files, ..summary })
}
