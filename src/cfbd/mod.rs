//! Client side of the CollegeFootballData roster API: request/response types,
//! the HTTP fetcher, rate-limit retries and request pacing.

pub mod http;
pub mod pacing;
pub mod retry;
#[cfg(any(test, feature = "test-utils"))]
pub mod testing;
pub mod types;

pub use http::{classify, FetchOutcome, RosterClient, RosterQuery, RosterSource, DEFAULT_BASE_URL};
pub use pacing::{Clock, RequestPacer, TokioClock};
#[cfg(any(test, feature = "test-utils"))]
pub use pacing::VirtualClock;
pub use retry::{
    fetch_with_retry, Backoff, RetryPolicy, SkipReason, UnitOutcome, MAX_BACKOFF_DELAY,
};
pub use types::{PlayerRecord, UNKNOWN};
