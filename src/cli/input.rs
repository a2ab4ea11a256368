//! Comma-separated team/year lists, from flags or interactive prompts.

use std::io::{BufRead, Write};

use super::types::{Season, Team};
use crate::error::{Result, RosterError};

/// Split a comma-separated list of team names, dropping blank entries.
pub fn parse_team_list(input: &str) -> Result<Vec<Team>> {
    let teams: Vec<Team> = input
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(Team::new)
        .collect();

    if teams.is_empty() {
        return Err(RosterError::EmptyInput {
            what: "teams".to_string(),
        });
    }
    Ok(teams)
}

/// Split a comma-separated list of years. Any malformed entry fails the whole list.
pub fn parse_season_list(input: &str) -> Result<Vec<Season>> {
    let seasons = input
        .split(',')
        .map(str::trim)
        .filter(|year| !year.is_empty())
        .map(str::parse::<Season>)
        .collect::<Result<Vec<_>>>()?;

    if seasons.is_empty() {
        return Err(RosterError::EmptyInput {
            what: "years".to_string(),
        });
    }
    Ok(seasons)
}

/// Print `prompt` and read one line of reply.
pub fn prompt_line<R: BufRead, W: Write>(reader: &mut R, writer: &mut W, prompt: &str) -> Result<String> {
    write!(writer, "{prompt}")?;
    writer.flush()?;

    let mut line = String::new();
    reader.read_line(&mut line)?;
    Ok(line.trim_end_matches(&['\r', '\n'][..]).to_string())
}

/// Use the flag value when given, otherwise ask on the terminal.
pub fn teams_from_flag_or_prompt(flag: Option<&str>) -> Result<Vec<Team>> {
    match flag {
        Some(list) => parse_team_list(list),
        None => {
            let stdin = std::io::stdin();
            let line = prompt_line(
                &mut stdin.lock(),
                &mut std::io::stdout(),
                "Enter teams (comma-separated): ",
            )?;
            parse_team_list(&line)
        }
    }
}

/// Use the flag value when given, otherwise ask on the terminal.
pub fn seasons_from_flag_or_prompt(flag: Option<&str>) -> Result<Vec<Season>> {
    match flag {
        Some(list) => parse_season_list(list),
        None => {
            let stdin = std::io::stdin();
            let line = prompt_line(
                &mut stdin.lock(),
                &mut std::io::stdout(),
                "Enter years (comma-separated): ",
            )?;
            parse_season_list(&line)
        }
    }
}
