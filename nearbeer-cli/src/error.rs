//! Error types emitted by the nearbeer CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use nearbeer_core::{CoordinateError, CrawlRequestError, GeocodeError, PlanError};
use nearbeer_data::ClientBuildError;
use nearbeer_data::fs::JsonFileError;
use thiserror::Error;

/// Errors emitted by the nearbeer CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Flag name without leading dashes.
        field: &'static str,
        /// Environment variable that can supply the value.
        env: &'static str,
    },
    /// Neither coordinates nor a city were supplied for the crawl origin.
    #[error("missing crawl origin (set --lat and --lng, or --city)")]
    MissingOrigin,
    /// The supplied origin coordinates are invalid.
    #[error("invalid crawl origin: {0}")]
    InvalidOrigin(#[from] CoordinateError),
    /// The requested stop count is out of range.
    #[error(transparent)]
    InvalidRequest(#[from] CrawlRequestError),
    /// The maximum hop distance is not a positive number of kilometres.
    #[error("max-step-km must be a positive number of kilometres, got {0}")]
    InvalidMaxStep(f64),
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Flag naming the path.
        field: &'static str,
        /// Path as configured.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Flag naming the path.
        field: &'static str,
        /// Path as configured.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Flag naming the path.
        field: &'static str,
        /// Path as configured.
        path: Utf8PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// Loading the brewery dump failed.
    #[error("failed to load breweries: {0}")]
    LoadBreweries(#[from] JsonFileError),
    /// Constructing an HTTP adapter failed.
    #[error("failed to build client for {base_url:?}: {source}")]
    BuildClient {
        /// Base URL the client was built for.
        base_url: String,
        /// Construction failure.
        #[source]
        source: ClientBuildError,
    },
    /// Resolving a city name failed.
    #[error(transparent)]
    Geocode(#[from] GeocodeError),
    /// Planning the crawl failed.
    #[error(transparent)]
    Plan(#[from] PlanError),
    /// Serialising command output failed.
    #[error("failed to serialise output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
