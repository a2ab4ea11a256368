//! Replay source for driving the pipeline without a network.

use std::collections::VecDeque;
use std::sync::Mutex;

use super::http::{FetchOutcome, RosterQuery, RosterSource};

/// Answers queries with pre-recorded outcomes, in order, and remembers
/// every query it was asked.
///
/// Once the script runs out every further request gets a 503.
#[derive(Debug, Default)]
pub struct ScriptedSource {
    script: Mutex<VecDeque<FetchOutcome>>,
    seen: Mutex<Vec<RosterQuery>>,
}

impl ScriptedSource {
    pub fn new(script: impl IntoIterator<Item = FetchOutcome>) -> Self {
        Self {
            script: Mutex::new(script.into_iter().collect()),
            seen: Mutex::new(Vec::new()),
        }
    }

    /// Queries received so far, in order.
    pub fn queries(&self) -> Vec<RosterQuery> {
        self.seen
            .lock()
            .map(|seen| seen.clone())
            .unwrap_or_default()
    }

    pub fn calls(&self) -> usize {
        self.queries().len()
    }
}

impl RosterSource for ScriptedSource {
    async fn fetch(&self, query: &RosterQuery) -> FetchOutcome {
        if let Ok(mut seen) = self.seen.lock() {
            seen.push(query.clone());
        }
        self.script
            .lock()
            .ok()
            .and_then(|mut script| script.pop_front())
            .unwrap_or(FetchOutcome::HttpStatus(503))
    }
}
