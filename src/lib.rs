//! College Football Roster Downloader Library
//!
//! Pulls season rosters from the CollegeFootballData API, folds players
//! across several seasons into one roster per team, and writes each roster
//! as a CSV file.
//!
//! ## Features
//!
//! - **Hometowns**: one bulk request per season; each player keeps the
//!   first-seen home city and state
//! - **Tenure**: one request per team and season; each player gets the first
//!   and last season they appeared in
//! - **Rate-limit aware**: 429 responses are retried after a delay and
//!   consecutive requests are spaced out
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cfb_rosters::{
//!     cfbd::{RosterClient, RetryPolicy, TokioClock},
//!     commands::tenure::collect_tenure,
//!     export::export_all,
//!     Season, Team,
//! };
//! use std::{path::Path, time::Duration};
//!
//! # async fn example() -> cfb_rosters::Result<()> {
//! let client = RosterClient::new(cfb_rosters::DEFAULT_BASE_URL, "my-api-key")?;
//! let (rosters, _summary) = collect_tenure(
//!     &client,
//!     &TokioClock,
//!     RetryPolicy::default(),
//!     Duration::from_secs(2),
//!     &[Team::new("Utah")],
//!     &[Season::new(2018), Season::new(2019)],
//! )
//! .await;
//!
//! export_all(Path::new("CFB_Rosters"), &rosters);
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! The API key is read from the environment or a `.env` file:
//! ```bash
//! export CFB_API_KEY=your-key
//! ```

pub mod cfbd;
pub mod cli;
pub mod commands;
pub mod error;
pub mod export;
pub mod roster;

// Re-export commonly used types
pub use cfbd::DEFAULT_BASE_URL;
pub use cli::types::{Season, Team};
pub use error::{Result, RosterError};

pub const API_KEY_ENV_VAR: &str = "CFB_API_KEY";
pub const API_BASE_URL_ENV_VAR: &str = "CFB_API_BASE_URL";
pub const DEFAULT_OUTPUT_DIR: &str = "CFB_Rosters";
