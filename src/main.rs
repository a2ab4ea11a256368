//! Entry point: parse CLI and dispatch to command handlers.

use cfb_rosters::{
    cli::{
        input::{parse_team_list, seasons_from_flag_or_prompt, teams_from_flag_or_prompt},
        Cli, Commands,
    },
    commands::{
        common::RunSettings, hometowns::handle_hometowns, resolve_api_key, tenure::handle_tenure,
    },
    Result, Season, Team,
};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Initialize tracing; `LOG_FORMAT=json` switches to JSON lines.
fn init_tracing() {
    let json_format = std::env::var("LOG_FORMAT")
        .map(|v| v.to_lowercase() == "json")
        .unwrap_or(false);

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cfb_rosters=info"));

    if json_format {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn run(cli: Cli) -> Result<()> {
    let api_key = resolve_api_key()?;

    let summary = match cli.command {
        Commands::Hometowns {
            common,
            start_year,
            end_year,
            teams,
        } => {
            let teams = match teams {
                Some(list) => parse_team_list(&list)?,
                None => Team::defaults(),
            };
            let seasons = Season::range_inclusive(start_year, end_year);
            let settings = RunSettings::from_args(common, api_key);
            handle_hometowns(&settings, teams, &seasons).await?
        }

        Commands::Tenure {
            common,
            teams,
            years,
        } => {
            let teams = teams_from_flag_or_prompt(teams.as_deref())?;
            let seasons = seasons_from_flag_or_prompt(years.as_deref())?;
            let settings = RunSettings::from_args(common, api_key);
            handle_tenure(&settings, &teams, &seasons).await?
        }
    };

    info!(
        units = summary.units,
        skipped = summary.skipped,
        files = summary.files.len(),
        "Run finished"
    );
    Ok(())
}

/// Run the CLI.
#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        error!("Command failed: {}", e);
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
