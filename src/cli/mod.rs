//! CLI argument definitions and parsing.

pub mod input;
pub mod types;

use clap::{Args, Parser, Subcommand};
use types::{Season, DEFAULT_END_SEASON, DEFAULT_START_SEASON};

use crate::{API_BASE_URL_ENV_VAR, DEFAULT_BASE_URL, DEFAULT_OUTPUT_DIR};

/// Connection, output and pacing options shared by both commands
#[derive(Debug, Args)]
pub struct CommonArgs {
    /// Roster endpoint (or set `CFB_API_BASE_URL`).
    #[clap(long, env = API_BASE_URL_ENV_VAR, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Directory the per-team roster files are written to.
    #[clap(long, short, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: std::path::PathBuf,

    /// Minimum seconds between consecutive requests.
    #[clap(long, default_value_t = 2)]
    pub request_interval_secs: u64,

    /// Seconds to wait after a 429 before retrying the same request.
    #[clap(long, default_value_t = 15)]
    pub rate_limit_delay_secs: u64,

    /// Give up on a request after this many rate-limit retries (unbounded if omitted).
    #[clap(long)]
    pub max_retries: Option<u32>,

    /// Double the rate-limit delay on every consecutive retry (capped at two minutes).
    #[clap(long)]
    pub exponential_backoff: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Bulk-fetch every team per season and record each player's hometown.
    ///
    /// One request per season; only players of tracked teams are kept and the
    /// first-seen home city/state wins.
    Hometowns {
        #[clap(flatten)]
        common: CommonArgs,

        /// First season to fetch.
        #[clap(long, default_value_t = DEFAULT_START_SEASON)]
        start_year: Season,

        /// Last season to fetch (inclusive).
        #[clap(long, default_value_t = DEFAULT_END_SEASON)]
        end_year: Season,

        /// Comma-separated teams to track instead of the built-in list.
        #[clap(long)]
        teams: Option<String>,
    },

    /// Fetch each team per season and record each player's first and last year.
    ///
    /// Prompts for teams and years when the flags are not given.
    Tenure {
        #[clap(flatten)]
        common: CommonArgs,

        /// Comma-separated teams, e.g. `Utah,Oregon`.
        #[clap(long)]
        teams: Option<String>,

        /// Comma-separated years, e.g. `2018,2019,2020`.
        #[clap(long)]
        years: Option<String>,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "cfb-rosters", about = "College football roster downloader")]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hometowns_defaults() {
        let cli = Cli::try_parse_from(["cfb-rosters", "hometowns"]).unwrap();
        match cli.command {
            Commands::Hometowns {
                common,
                start_year,
                end_year,
                teams,
            } => {
                assert_eq!(start_year, Season::new(2016));
                assert_eq!(end_year, Season::new(2024));
                assert!(teams.is_none());
                assert_eq!(common.request_interval_secs, 2);
                assert_eq!(common.rate_limit_delay_secs, 15);
                assert!(common.max_retries.is_none());
                assert!(!common.exponential_backoff);
                assert_eq!(common.output_dir, std::path::PathBuf::from("CFB_Rosters"));
            }
            other => panic!("Expected Hometowns, got {other:?}"),
        }
    }

    #[test]
    fn test_tenure_flags() {
        let cli = Cli::try_parse_from([
            "cfb-rosters",
            "tenure",
            "--teams",
            "Utah,Oregon",
            "--years",
            "2018,2019",
            "--max-retries",
            "3",
            "--exponential-backoff",
        ])
        .unwrap();

        match cli.command {
            Commands::Tenure {
                common,
                teams,
                years,
            } => {
                assert_eq!(teams.as_deref(), Some("Utah,Oregon"));
                assert_eq!(years.as_deref(), Some("2018,2019"));
                assert_eq!(common.max_retries, Some(3));
                assert!(common.exponential_backoff);
            }
            other => panic!("Expected Tenure, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_start_year_rejected() {
        assert!(Cli::try_parse_from(["cfb-rosters", "hometowns", "--start-year", "soon"]).is_err());
    }
}
