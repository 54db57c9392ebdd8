//! `plan` command: build a walking crawl from a starting point.

use std::io::Write;
use std::time::Duration;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use nearbeer_core::{
    Coordinate, CrawlRequest, CrawlRequestError, DEFAULT_MAX_STEP_KM, DEFAULT_STOP_COUNT,
    MAX_STOP_COUNT, PlannedCrawl, RouteBuilder, RouteOutcome, Stop, plan_crawl, route_length_km,
};
use nearbeer_data::directory::DEFAULT_DIRECTORY_URL;
use nearbeer_data::geocoding::DEFAULT_GEOCODER_URL;
use nearbeer_data::{DEFAULT_TIMEOUT_SECS, HttpGeocoderConfig, HttpVenueDirectoryConfig};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::sources::{DefaultSourcesBuilder, SourcesBuilder};
use crate::{
    ARG_GEOCODER_URL, ARG_PLAN_BREWERIES, ARG_PLAN_CITY, ARG_PLAN_COUNT, ARG_PLAN_DIRECTORY_URL,
    ARG_PLAN_LAT, ARG_PLAN_LNG, ARG_PLAN_MAX_STEP_KM, ARG_TIMEOUT_SECS, CliError, ENV_PLAN_LAT,
    ENV_PLAN_LNG, write_json,
};

/// CLI arguments for the `plan` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Plan a short walking crawl between nearby breweries. The \
                 starting point is given as coordinates or as a city name \
                 to geocode. Breweries come from Open Brewery DB or from a \
                 local JSON dump of its records.",
    about = "Plan a walking brewery crawl"
)]
#[ortho_config(prefix = "NEARBEER")]
pub(crate) struct PlanArgs {
    /// Latitude of the starting point in decimal degrees.
    #[arg(long = ARG_PLAN_LAT, value_name = "degrees", allow_hyphen_values = true)]
    #[serde(default)]
    pub(crate) lat: Option<f64>,
    /// Longitude of the starting point in decimal degrees.
    #[arg(long = ARG_PLAN_LNG, value_name = "degrees", allow_hyphen_values = true)]
    #[serde(default)]
    pub(crate) lng: Option<f64>,
    /// City to start from when no coordinates are given.
    #[arg(long = ARG_PLAN_CITY, value_name = "name")]
    #[serde(default)]
    pub(crate) city: Option<String>,
    /// Number of stops to plan (1 to 20, default 5).
    #[arg(long = ARG_PLAN_COUNT, value_name = "stops")]
    #[serde(default)]
    pub(crate) count: Option<usize>,
    /// JSON dump of Open Brewery DB records to use instead of the live API.
    #[arg(long = ARG_PLAN_BREWERIES, value_name = "path")]
    #[serde(default)]
    pub(crate) breweries: Option<Utf8PathBuf>,
    /// Open Brewery DB API root.
    #[arg(long = ARG_PLAN_DIRECTORY_URL, value_name = "url")]
    #[serde(default)]
    pub(crate) directory_url: Option<String>,
    /// Nominatim root used to geocode `--city`.
    #[arg(long = ARG_GEOCODER_URL, value_name = "url")]
    #[serde(default)]
    pub(crate) geocoder_url: Option<String>,
    /// Longest walk allowed between consecutive stops, in kilometres.
    #[arg(long = ARG_PLAN_MAX_STEP_KM, value_name = "km")]
    #[serde(default)]
    pub(crate) max_step_km: Option<f64>,
    /// HTTP request timeout in seconds.
    #[arg(long = ARG_TIMEOUT_SECS, value_name = "secs")]
    #[serde(default)]
    pub(crate) timeout_secs: Option<u64>,
}

impl PlanArgs {
    pub(crate) fn into_config(self) -> Result<PlanConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        PlanConfig::try_from(merged)
    }
}

/// Where the crawl starts.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Origin {
    Coordinates(Coordinate),
    City(String),
}

/// Where candidate breweries come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum VenueSettings {
    File(Utf8PathBuf),
    Http(HttpVenueDirectoryConfig),
}

/// Resolved `plan` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PlanConfig {
    pub(crate) origin: Origin,
    pub(crate) count: usize,
    pub(crate) venues: VenueSettings,
    pub(crate) geocoder: HttpGeocoderConfig,
    pub(crate) max_step_km: f64,
}

impl PlanConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        match &self.venues {
            VenueSettings::File(path) => require_existing(path, ARG_PLAN_BREWERIES),
            VenueSettings::Http(_) => Ok(()),
        }
    }
}

pub(crate) fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match nearbeer_data::fs::file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

impl TryFrom<PlanArgs> for PlanConfig {
    type Error = CliError;

    fn try_from(args: PlanArgs) -> Result<Self, Self::Error> {
        let origin = match (args.lat, args.lng, args.city) {
            (Some(lat), Some(lng), _) => Origin::Coordinates(Coordinate::new(lat, lng)?),
            (Some(_), None, _) => {
                return Err(CliError::MissingArgument {
                    field: ARG_PLAN_LNG,
                    env: ENV_PLAN_LNG,
                });
            }
            (None, Some(_), _) => {
                return Err(CliError::MissingArgument {
                    field: ARG_PLAN_LAT,
                    env: ENV_PLAN_LAT,
                });
            }
            (None, None, Some(city)) => Origin::City(city),
            (None, None, None) => return Err(CliError::MissingOrigin),
        };

        let count = args.count.unwrap_or(DEFAULT_STOP_COUNT);
        if !(1..=MAX_STOP_COUNT).contains(&count) {
            return Err(CrawlRequestError::CountOutOfRange(count).into());
        }

        let max_step_km = args.max_step_km.unwrap_or(DEFAULT_MAX_STEP_KM);
        if !(max_step_km.is_finite() && max_step_km > 0.0) {
            return Err(CliError::InvalidMaxStep(max_step_km));
        }

        let timeout = Duration::from_secs(args.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS));
        let directory_url = args
            .directory_url
            .unwrap_or_else(|| DEFAULT_DIRECTORY_URL.to_owned());
        let venues = args.breweries.map_or_else(
            || {
                VenueSettings::Http(
                    HttpVenueDirectoryConfig::new(directory_url).with_timeout(timeout),
                )
            },
            VenueSettings::File,
        );
        let geocoder_url = args
            .geocoder_url
            .unwrap_or_else(|| DEFAULT_GEOCODER_URL.to_owned());
        let geocoder = HttpGeocoderConfig::new(geocoder_url).with_timeout(timeout);

        Ok(Self {
            origin,
            count,
            venues,
            geocoder,
            max_step_km,
        })
    }
}

/// What `plan` prints: the crawl plus enough context to show it on a map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PlanReport {
    pub(crate) origin: Coordinate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) place_name: Option<String>,
    pub(crate) stops: Vec<Stop>,
    pub(crate) outcome: RouteOutcome,
    pub(crate) message: String,
    pub(crate) length_km: f64,
}

impl PlanReport {
    fn new(origin: Coordinate, place_name: Option<String>, planned: PlannedCrawl) -> Self {
        Self {
            origin,
            place_name,
            message: planned.outcome.to_string(),
            length_km: route_length_km(&planned.stops),
            stops: planned.stops,
            outcome: planned.outcome,
        }
    }
}

pub(crate) fn run_plan(args: PlanArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_plan_with(args, &DefaultSourcesBuilder, &mut stdout)
}

pub(crate) fn run_plan_with(
    args: PlanArgs,
    builder: &dyn SourcesBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let report = execute_plan(args, builder)?;
    write_json(writer, &report)
}

fn execute_plan(args: PlanArgs, builder: &dyn SourcesBuilder) -> Result<PlanReport, CliError> {
    let config = resolve_plan_config(args)?;
    let (origin, place_name) = match &config.origin {
        Origin::Coordinates(coordinate) => (*coordinate, None),
        Origin::City(city) => {
            let place = builder.geocoder(&config.geocoder)?.geocode(city)?;
            log::info!("starting from {}", place.display_name);
            (place.coordinate, Some(place.display_name))
        }
    };
    let request = CrawlRequest::new(origin, config.count)?;
    let venues = builder.venues(&config.venues)?;
    let planned = plan_crawl(
        &request,
        venues.as_ref(),
        &RouteBuilder::new(config.max_step_km),
    )?;
    Ok(PlanReport::new(origin, place_name, planned))
}

fn resolve_plan_config(args: PlanArgs) -> Result<PlanConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<PlanConfig, CliError> {
    let merged = PlanArgs::merge_from_layers(layers).map_err(CliError::from)?;
    PlanConfig::try_from(merged)
}
