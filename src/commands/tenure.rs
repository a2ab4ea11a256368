//! Tenure command: one request per team and season, first/last active year per player.

use std::time::Duration;

use tracing::info;

use crate::{
    cfbd::{Clock, RetryPolicy, RosterQuery, RosterSource, TokioClock, UnitOutcome},
    export::export_all,
    roster::{RosterAggregator, Tenure},
    Result, Season, Team,
};

use super::common::{RunSettings, RunSummary, UnitRunner};

/// Fetch every team for every season, teams in the outer loop.
pub async fn collect_tenure<S, C>(
    source: &S,
    clock: &C,
    policy: RetryPolicy,
    interval: Duration,
    teams: &[Team],
    seasons: &[Season],
) -> (RosterAggregator<Tenure>, RunSummary)
where
    S: RosterSource,
    C: Clock,
{
    let mut aggregator = RosterAggregator::new();
    let mut runner = UnitRunner::new(source, clock, policy, interval);

    for team in teams {
        aggregator.track(team.clone());
        for &season in seasons {
            let query = RosterQuery::team_season(team.clone(), season);
            match runner.run(&query).await {
                UnitOutcome::Data(records) => {
                    let kept = aggregator.ingest(team, season, &records);
                    info!(%team, %season, players = kept, "Retrieved {team} roster for {season}");
                }
                UnitOutcome::Skipped(reason) => {
                    info!(%team, %season, %reason, "No roster data for {team} {season}");
                }
            }
        }
    }

    let summary = runner.summary(Vec::new());
    (aggregator, summary)
}

/// Run the tenure command end to end and write one file per team.
pub async fn handle_tenure(
    settings: &RunSettings,
    teams: &[Team],
    seasons: &[Season],
) -> Result<RunSummary> {
    let client = settings.client()?;
    info!(
        teams = teams.len(),
        seasons = seasons.len(),
        base_url = client.base_url(),
        "Starting tenure run"
    );

    let (aggregator, summary) = collect_tenure(
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cfbd::{testing::ScriptedSource, FetchOutcome, PlayerRecord, VirtualClock};

    fn player(first: &str, last: &str) -> PlayerRecord {
        PlayerRecord {
            first_name: Some(first.to_string()),
            last_name: Some(last.to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_jane_doe_spans_two_seasons() {
        let source = ScriptedSource::new(vec![
            FetchOutcome::Success(vec![player("Jane", "Doe")]),
            FetchOutcome::Success(vec![player("Jane", "Doe"), player("Jo", "Ray")]),
        ]);
        let utah = Team::new("Utah");

        let (aggregator, summary) = collect_tenure(
            &source,
            &VirtualClock::new(),
            RetryPolicy::default(),
            Duration::ZERO,
            std::slice::from_ref(&utah),
            &[Season::new(2018), Season::new(2019)],
        )
        .await;

        let roster = aggregator.roster(&utah).unwrap();
        let jane = roster.get("Jane Doe").unwrap();
        assert_eq!(jane.start_year, Season::new(2018));
        assert_eq!(jane.end_year, Season::new(2019));
        let jo = roster.get("Jo Ray").unwrap();
        assert_eq!((jo.start_year, jo.end_year), (Season::new(2019), Season::new(2019)));
        assert_eq!(summary.skipped, 0);
    }

    #[tokio::test]
    async fn test_queries_cover_team_by_season_in_order() {
        let source = ScriptedSource::new(vec![]);
        let teams = [Team::new("Utah"), Team::new("Oregon")];
        let seasons = [Season::new(2018), Season::new(2019)];

        let (aggregator, summary) = collect_tenure(
            &source,
            &VirtualClock::new(),
            RetryPolicy::default(),
            Duration::ZERO,
            &teams,
            &seasons,
        )
        .await;

        let queries = source.queries();
        assert_eq!(
            queries,
            vec![
                RosterQuery::team_season(Team::new("Utah"), Season::new(2018)),
                RosterQuery::team_season(Team::new("Utah"), Season::new(2019)),
                RosterQuery::team_season(Team::new("Oregon"), Season::new(2018)),
                RosterQuery::team_season(Team::new("Oregon"), Season::new(2019)),
            ]
        );
        // Exhausted script answers 503, so every unit is skipped but teams stay registered.
        assert_eq!(summary.skipped, 4);
        assert_eq!(aggregator.teams().count(), 2);
    }

    #[tokio::test]
    async fn test_pacing_applies_between_all_units() {
        let source = ScriptedSource::new(vec![
            FetchOutcome::Success(vec![]),
            FetchOutcome::HttpStatus(500),
            FetchOutcome::Success(vec![]),
        ]);
        let clock = VirtualClock::new();

        collect_tenure(
            &source,
            &clock,
            RetryPolicy::default(),
            Duration::from_secs(2),
            &[Team::new("Utah")],
            &[Season::new(2018), Season::new(2019), Season::new(2020)],
        )
        .await;

        assert_eq!(clock.sleeps(), vec![Duration::from_secs(2); 2]);
    }

    #[tokio::test]
    async fn test_rate_limited_unit_is_still_followed_by_pause() {
        let source = ScriptedSource::new(vec![
            FetchOutcome::RateLimited,
            FetchOutcome::Success(vec![player("Jane", "Doe")]),
            FetchOutcome::Success(vec![player("Jane", "Doe")]),
        ]);
        let clock = VirtualClock::new();

        let (_, summary) = collect_tenure(
            &source,
            &clock,
            RetryPolicy::default(),
            Duration::from_secs(2),
            &[Team::new("Utah")],
            &[Season::new(2018), Season::new(2019)],
        )
        .await;

        assert_eq!(
            clock.sleeps(),
            vec![Duration::from_secs(15), Duration::from_secs(2)]
        );
        assert_eq!(summary.skipped, 0);
    }
}
