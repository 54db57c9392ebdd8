//! Command-line interface for planning walking brewery crawls.
#![forbid(unsafe_code)]

use std::io::Write;

use clap::{Parser, Subcommand};
use serde::Serialize;

mod error;
mod geocode;
mod plan;
mod sources;

pub use error::CliError;

use geocode::GeocodeArgs;
use plan::PlanArgs;

const ARG_PLAN_LAT: &str = "lat";
const ARG_PLAN_LNG: &str = "lng";
const ARG_PLAN_CITY: &str = "city";
const ARG_PLAN_COUNT: &str = "count";
const ARG_PLAN_BREWERIES: &str = "breweries";
const ARG_PLAN_DIRECTORY_URL: &str = "directory-url";
const ARG_PLAN_MAX_STEP_KM: &str = "max-step-km";
const ARG_GEOCODE_CITY: &str = "city";
const ARG_GEOCODER_URL: &str = "geocoder-url";
const ARG_TIMEOUT_SECS: &str = "timeout-secs";
const ENV_PLAN_LAT: &str = "NEARBEER_CMDS_PLAN_LAT";
const ENV_PLAN_LNG: &str = "NEARBEER_CMDS_PLAN_LNG";
const ENV_GEOCODE_CITY: &str = "NEARBEER_CMDS_GEOCODE_CITY";

/// Run the nearbeer CLI with the current process arguments and environment.
///
/// # Errors
///
/// Returns [`CliError`] when arguments or configuration are invalid, when a
/// collaborator (directory, geocoder) fails, or when output cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Plan(args) => plan::run_plan(args),
        Command::Geocode(args) => geocode::run_geocode(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "nearbeer",
    about = "Plan short walking crawls between nearby breweries",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Plan a walking crawl from a starting point.
    Plan(PlanArgs),
    /// Resolve a city name to coordinates.
    Geocode(GeocodeArgs),
}

/// Write `value` as pretty-printed JSON followed by a newline.
fn write_json<T: Serialize>(writer: &mut dyn Write, value: &T) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
mod tests;
