//! `geocode` command: resolve a city name to coordinates.

use std::io::Write;
use std::time::Duration;

use clap::Parser;
use nearbeer_core::GeocodedPlace;
use nearbeer_data::geocoding::DEFAULT_GEOCODER_URL;
use nearbeer_data::{DEFAULT_TIMEOUT_SECS, HttpGeocoderConfig};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::sources::{DefaultSourcesBuilder, SourcesBuilder};
use crate::{
    ARG_GEOCODE_CITY, ARG_GEOCODER_URL, ARG_TIMEOUT_SECS, CliError, ENV_GEOCODE_CITY, write_json,
};

/// CLI arguments for the `geocode` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Resolve a city or place name to a single coordinate using \
                 Nominatim, printing latitude, longitude and the matched \
                 display name as JSON.",
    about = "Resolve a city name to coordinates"
)]
#[ortho_config(prefix = "NEARBEER")]
pub(crate) struct GeocodeArgs {
    /// City or place name, e.g. "Asheville, NC".
    #[arg(value_name = ARG_GEOCODE_CITY)]
    #[serde(default)]
    pub(crate) city: Option<String>,
    /// Nominatim service root.
    #[arg(long = ARG_GEOCODER_URL, value_name = "url")]
    #[serde(default)]
    pub(crate) geocoder_url: Option<String>,
    /// HTTP request timeout in seconds.
    #[arg(long = ARG_TIMEOUT_SECS, value_name = "secs")]
    #[serde(default)]
    pub(crate) timeout_secs: Option<u64>,
}

/// Resolved `geocode` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct GeocodeConfig {
    pub(crate) city: String,
    pub(crate) geocoder: HttpGeocoderConfig,
}

impl TryFrom<GeocodeArgs> for GeocodeConfig {
    type Error = CliError;

    fn try_from(args: GeocodeArgs) -> Result<Self, Self::Error> {
        let city = args.city.ok_or(CliError::MissingArgument {
            field: ARG_GEOCODE_CITY,
            env: ENV_GEOCODE_CITY,
        })?;
        let timeout = Duration::from_secs(args.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS));
        let base_url = args
            .geocoder_url
            .unwrap_or_else(|| DEFAULT_GEOCODER_URL.to_owned());
        Ok(Self {
            city,
            geocoder: HttpGeocoderConfig::new(base_url).with_timeout(timeout),
        })
    }
}

pub(crate) fn run_geocode(args: GeocodeArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_geocode_with(args, &DefaultSourcesBuilder, &mut stdout)
}

pub(crate) fn run_geocode_with(
    args: GeocodeArgs,
    builder: &dyn SourcesBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let place = execute_geocode(args, builder)?;
    write_json(writer, &place)
}

fn execute_geocode(
    args: GeocodeArgs,
    builder: &dyn SourcesBuilder,
) -> Result<GeocodedPlace, CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    let config = GeocodeConfig::try_from(merged)?;
    let place = builder.geocoder(&config.geocoder)?.geocode(&config.city)?;
    Ok(place)
}
