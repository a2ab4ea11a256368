//! Command implementations for the roster downloader

pub mod common;
pub mod hometowns;
pub mod tenure;

use crate::{error::RosterError, Result, API_KEY_ENV_VAR};

/// Read the bearer token from `CFB_API_KEY`.
///
/// Call after loading any `.env` file. A missing or blank value is fatal.
pub fn resolve_api_key() -> Result<String> {
    match std::env::var(API_KEY_ENV_VAR) {
        Ok(key) if !key.trim().is_empty() => Ok(key.trim().to_string()),
        _ => Err(RosterError::MissingApiKey {
            env_var: API_KEY_ENV_VAR.to_string(),
        }),
    }
}
