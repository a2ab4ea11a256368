//! Shared run settings and the paced fetch loop used by both commands.

use std::path::PathBuf;
use std::time::Duration;

use tracing::info;

use crate::{
    cfbd::{
        fetch_with_retry, Backoff, Clock, RequestPacer, RetryPolicy, RosterClient, RosterQuery,
        RosterSource, UnitOutcome, MAX_BACKOFF_DELAY,
    },
    cli::CommonArgs,
    Result,
};

/// Everything a run needs beyond the list of units.
#[derive(Debug, Clone)]
pub struct RunSettings {
    pub base_url: String,
    pub api_key: String,
    pub output_dir: PathBuf,
    pub retry: RetryPolicy,
    pub request_interval: Duration,
}

impl RunSettings {
    pub fn from_args(args: CommonArgs, api_key: String) -> Self {
        let backoff = if args.exponential_backoff {
            Backoff::Exponential {
                max: MAX_BACKOFF_DELAY,
            }
        } else {
            Backoff::Fixed
        };

        Self {
            base_url: args.base_url,
            api_key,
            output_dir: args.output_dir,
            retry: RetryPolicy {
                rate_limit_delay: Duration::from_secs(args.rate_limit_delay_secs),
                max_retries: args.max_retries,
                backoff,
            },
            request_interval: Duration::from_secs(args.request_interval_secs),
        }
    }

    pub fn client(&self) -> Result<RosterClient> {
        RosterClient::new(self.base_url.clone(), &self.api_key)
    }
}

/// Counts reported at the end of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub units: usize,
    pub skipped: usize,
    pub files: Vec<PathBuf>,
}

/// Paced, retrying access to a [`RosterSource`], one unit at a time.
pub struct UnitRunner<'a, S, C> {
    source: &'a S,
    clock: &'a C,
    policy: RetryPolicy,
    pacer: RequestPacer,
    units: usize,
    skipped: usize,
}

impl<'a, S: RosterSource, C: Clock> UnitRunner<'a, S, C> {
    pub fn new(source: &'a S, clock: &'a C, policy: RetryPolicy, interval: Duration) -> Self {
        Self {
            source,
            clock,
            policy,
            pacer: RequestPacer::new(interval),
            units: 0,
            skipped: 0,
        }
    }

    /// Wait for the pacer, then fetch `query` to a terminal outcome.
    ///
    /// The pause before the next unit starts counting once this one is done.
    pub async fn run(&mut self, query: &RosterQuery) -> UnitOutcome {
        self.pacer.wait_turn(self.clock).await;
        info!(unit = %query, "Fetching roster");

        let outcome = fetch_with_retry(self.source, self.clock, &self.policy, query).await;
        self.pacer.unit_finished(self.clock);
        self.units += 1;
        if matches!(outcome, UnitOutcome::Skipped(_)) {
            self.skipped += 1;
        }
        outcome
    }

    pub fn summary(&self, files: Vec<PathBuf>) -> RunSummary {
        RunSummary {
            units: self.units,
            skipped: self.skipped,
            files,
        }
    }
}
