use serde::{Deserialize, Serialize};

#[cfg(test)]
mod tests;

/// Value substituted for any field the API leaves out or sends as `null`.
pub const UNKNOWN: &str = "Unknown";

/// One player entry of a `/roster` response.
///
/// Field presence is not guaranteed, so every field is optional and read
/// through an accessor that falls back to [`UNKNOWN`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct PlayerRecord {
    #[serde(rename = "firstName", default)]
    pub first_name: Option<String>,
    #[serde(rename = "lastName", default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub team: Option<String>,
    #[serde(rename = "homeCity", default)]
    pub home_city: Option<String>,
    #[serde(rename = "homeState", default)]
    pub home_state: Option<String>,
}

impl PlayerRecord {
    pub fn first_name(&self) -> &str {
        self.first_name.as_deref().unwrap_or(UNKNOWN)
    }

    pub fn last_name(&self) -> &str {
        self.last_name.as_deref().unwrap_or(UNKNOWN)
    }

    pub fn team(&self) -> &str {
        self.team.as_deref().unwrap_or(UNKNOWN)
    }

    pub fn home_city(&self) -> &str {
        self.home_city.as_deref().unwrap_or(UNKNOWN)
    }

    pub fn home_state(&self) -> &str {
        self.home_state.as_deref().unwrap_or(UNKNOWN)
    }

    /// Deduplication key: first and last name joined by a space, trimmed.
    ///
    /// Two different people with the same name collapse into one identity.
    pub fn identity(&self) -> String {
        format!("{} {}", self.first_name(), self.last_name())
            .trim()
            .to_string()
    }
}
