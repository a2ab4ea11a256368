//! Retry policy around a single fetch unit.
//!
//! Rate-limited requests are retried after a delay; every other failure ends
//! the unit immediately with a [`SkipReason`] so the run can move on.

use std::time::Duration;

use tracing::{error, info, warn};

use super::http::{FetchOutcome, RosterQuery, RosterSource};
use super::pacing::Clock;
use super::types::PlayerRecord;

/// Upper bound for exponential rate-limit delays.
pub const MAX_BACKOFF_DELAY: Duration = Duration::from_secs(120);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backoff {
    /// Same delay before every retry.
    Fixed,
    /// `delay * 2^(attempt - 1)`, never above `max`.
    Exponential { max: Duration },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    pub rate_limit_delay: Duration,
    /// `None` retries for as long as the API keeps answering 429.
    pub max_retries: Option<u32>,
    pub backoff: Backoff,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            rate_limit_delay: Duration::from_secs(15),
            max_retries: None,
            backoff: Backoff::Fixed,
        }
    }
}

impl RetryPolicy {
    /// Delay before retry number `attempt` (1-indexed).
    pub fn delay_for(&self, attempt: u32) -> Duration {
        match self.backoff {
            Backoff::Fixed => self.rate_limit_delay,
            Backoff::Exponential { max } => {
                let factor = 2u32.saturating_pow(attempt.saturating_sub(1));
                self.rate_limit_delay.saturating_mul(factor).min(max)
            }
        }
    }

    fn allows_retry(&self, attempt: u32) -> bool {
        self.max_retries.map_or(true, |max| attempt <= max)
    }
}

/// Why a unit produced no data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    Unauthorized,
    HttpStatus(u16),
    MalformedPayload(String),
    Transport(String),
    RetriesExhausted(u32),
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::Unauthorized => write!(f, "unauthorized, check your API key"),
            SkipReason::HttpStatus(code) => write!(f, "HTTP status {code}"),
            SkipReason::MalformedPayload(reason) => write!(f, "response is not a roster list: {reason}"),
            SkipReason::Transport(reason) => write!(f, "request failed: {reason}"),
            SkipReason::RetriesExhausted(n) => write!(f, "still rate limited after {n} retries"),
        }
    }
}

/// Terminal outcome of a unit after any retries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnitOutcome {
    Data(Vec<PlayerRecord>),
    Skipped(SkipReason),
}

/// Fetch `query`, retrying on rate limits according to `policy`.
pub async fn fetch_with_retry<S, C>(
    source: &S,
    clock: &C,
    policy: &RetryPolicy,
    query: &RosterQuery,
) -> UnitOutcome
where
    S: RosterSource,
    C: Clock,
{
    let mut retries = 0u32;

    loop {
        match source.fetch(query).await {
            FetchOutcome::Success(records) => return UnitOutcome::Data(records),
            FetchOutcome::RateLimited => {
                retries += 1;
                if !policy.allows_retry(retries) {
                    let reason = SkipReason::RetriesExhausted(retries - 1);
                    warn!(unit = %query, "Skipping: {reason}");
                    return UnitOutcome::Skipped(reason);
                }
                let delay = policy.delay_for(retries);
                info!(
                    unit = %query,
                    attempt = retries,
                    delay_secs = delay.as_secs_f64(),
                    "Rate limited, waiting before retrying"
                );
                clock.sleep(delay).await;
            }
            FetchOutcome::Unauthorized => {
                error!(unit = %query, "Unauthorized! Check your API key.");
                return UnitOutcome::Skipped(SkipReason::Unauthorized);
            }
            FetchOutcome::HttpStatus(code) => {
                warn!(unit = %query, status = code, "Error fetching roster");
                return UnitOutcome::Skipped(SkipReason::HttpStatus(code));
            }
            FetchOutcome::MalformedPayload(reason) => {
                warn!(unit = %query, %reason, "Response is not in JSON format");
                return UnitOutcome::Skipped(SkipReason::MalformedPayload(reason));
            }
            FetchOutcome::Transport(reason) => {
                warn!(unit = %query, %reason, "Request failed");
                return UnitOutcome::Skipped(SkipReason::Transport(reason));
            }
        }
    }
}
