//! HTTP access to the CollegeFootballData `/roster` endpoint.

use std::time::Duration;

use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION},
    Client, StatusCode,
};
use tracing::{info, warn};

use super::types::PlayerRecord;
use crate::{Result, Season, Team};

#[cfg(test)]
mod tests;

/// Roster endpoint of the CollegeFootballData v2 API.
pub const DEFAULT_BASE_URL: &str = "https://apinext.collegefootballdata.com/roster";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// One logical unit of work: a season, optionally narrowed to one team.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterQuery {
    pub season: Season,
    pub team: Option<Team>,
}

impl RosterQuery {
    /// All teams for a season.
    pub fn season(season: Season) -> Self {
        Self { season, team: None }
    }

    /// One team for a season.
    pub fn team_season(team: Team, season: Season) -> Self {
        Self {
            season,
            team: Some(team),
        }
    }

    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("year", self.season.to_string())];
        if let Some(team) = &self.team {
            params.push(("team", team.to_string()));
        }
        params
    }
}

impl std::fmt::Display for RosterQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.team {
            Some(team) => write!(f, "{} {}", team, self.season),
            None => write!(f, "{}", self.season),
        }
    }
}

/// Classified result of a single request attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Success(Vec<PlayerRecord>),
    Unauthorized,
    RateLimited,
    HttpStatus(u16),
    MalformedPayload(String),
    Transport(String),
}

/// Map a status code and body onto a [`FetchOutcome`].
pub fn classify(status: StatusCode, body: &str) -> FetchOutcome {
    match status {
        StatusCode::OK => match serde_json::from_str::<Vec<PlayerRecord>>(body) {
            Ok(records) => FetchOutcome::Success(records),
            Err(e) => FetchOutcome::MalformedPayload(e.to_string()),
        },
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => FetchOutcome::Unauthorized,
        StatusCode::TOO_MANY_REQUESTS => FetchOutcome::RateLimited,
        other => FetchOutcome::HttpStatus(other.as_u16()),
    }
}

/// Anything that can answer a [`RosterQuery`] with one attempt.
#[allow(async_fn_in_trait)]
pub trait RosterSource {
    async fn fetch(&self, query: &RosterQuery) -> FetchOutcome;
}

/// Build the headers sent with every request.
pub fn auth_header_map(api_key: &str) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    let mut bearer = HeaderValue::from_str(&format!("Bearer {}", api_key.trim()))?;
    bearer.set_sensitive(true);
    headers.insert(AUTHORIZATION, bearer);

    Ok(headers)
}

/// Bearer-authenticated client for the roster endpoint.
pub struct RosterClient {
    client: Client,
    base_url: String,
}

impl RosterClient {
    pub fn new(base_url: impl Into<String>, api_key: &str) -> Result<Self> {
        let client = Client::builder()
            .default_headers(auth_header_map(api_key)?)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl RosterSource for RosterClient {
    async fn fetch(&self, query: &RosterQuery) -> FetchOutcome {
        let response = match self
            .client
            .get(&self.base_url)
            .query(&query.params())
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!(unit = %query, error = %e, "Request failed before a response arrived");
                return FetchOutcome::Transport(e.to_string());
            }
        };

        let status = response.status();
        info!(url = %response.url(), status = status.as_u16(), "Requested roster");

        match response.text().await {
            Ok(body) => classify(status, &body),
            Err(e) => FetchOutcome::Transport(e.to_string()),
        }
    }
}
