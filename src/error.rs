//! Error types for the roster downloader

use thiserror::Error;


pub type Result<T> = std::result::Result<T, RosterError>;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Missing API key! Please set {env_var} in the environment or a .env file.")]
    MissingApiKey { env_var: String },

    #[error("Invalid year: {input:?}")]
    InvalidYear { input: String },

    #[error("No {what} provided")]
    EmptyInput { what: String },
}
