//! HTTP `VenueSource` using the Open Brewery DB `/breweries` endpoint.
//!
//! # Example
//!
//! ```no_run
//! use nearbeer_core::{Coordinate, VenueSource};
//! use nearbeer_data::directory::HttpVenueDirectory;
//!
//! let directory = HttpVenueDirectory::new("https://api.openbrewerydb.org/v1")?;
//! let origin = Coordinate::new(33.749, -84.388)?;
//! let candidates = directory.candidates_near(origin, 15)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::time::Duration;

use nearbeer_core::{Candidate, Coordinate, VenueSource, VenueSourceError};
use url::Url;

use super::openbrewerydb::{BreweryRecord, candidates_from_records};
use crate::http::{
    BlockingClient, ClientBuildError, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, endpoint,
};

/// Public Open Brewery DB API root.
pub const DEFAULT_DIRECTORY_URL: &str = "https://api.openbrewerydb.org/v1";

/// Largest page the directory will serve in one response.
pub const MAX_PER_PAGE: usize = 200;

/// Configuration for [`HttpVenueDirectory`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpVenueDirectoryConfig {
    /// API root, e.g. `"https://api.openbrewerydb.org/v1"`.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
    /// User agent sent with every request.
    pub user_agent: String,
}

impl Default for HttpVenueDirectoryConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_DIRECTORY_URL.to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

impl HttpVenueDirectoryConfig {
    /// Create a configuration for the given API root.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Set the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// Distance-ranked brewery lookup over HTTP.
///
/// The trait is synchronous; requests are driven on an owned Tokio runtime,
/// or on the caller's runtime via `block_in_place` when one is running with
/// the multi-threaded flavour.
#[derive(Debug)]
pub struct HttpVenueDirectory {
    client: BlockingClient,
    endpoint: Url,
}

impl HttpVenueDirectory {
    /// Create a directory client with default settings.
    ///
    /// # Errors
    ///
    /// Returns [`ClientBuildError`] when the URL is invalid or the HTTP
    /// client or runtime fails to build.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientBuildError> {
        Self::with_config(&HttpVenueDirectoryConfig::new(base_url))
    }

    /// Create a directory client with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClientBuildError`] when the URL is invalid or the HTTP
    /// client or runtime fails to build.
    pub fn with_config(config: &HttpVenueDirectoryConfig) -> Result<Self, ClientBuildError> {
        let endpoint = endpoint(&config.base_url, "breweries")?;
        let client = BlockingClient::new(&config.user_agent, config.timeout)?;
        Ok(Self { client, endpoint })
    }

    /// Build `{base}/breweries?by_dist={lat},{lng}&per_page={limit}`.
    fn query_url(&self, origin: Coordinate, limit: usize) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("by_dist", &format!("{},{}", origin.lat(), origin.lng()))
            .append_pair("per_page", &limit.min(MAX_PER_PAGE).to_string());
        url
    }
}

impl VenueSource for HttpVenueDirectory {
    fn candidates_near(
        &self,
        origin: Coordinate,
        limit: usize,
    ) -> Result<Vec<Candidate>, VenueSourceError> {
        if limit == 0 {
            return Ok(Vec::new());
        }
        let url = self.query_url(origin, limit);
        log::debug!("requesting breweries from {url}");
        let records: Vec<BreweryRecord> = self
            .client
            .get_json(&url, |message| VenueSourceError::Parse { message })?;
        let mut candidates = candidates_from_records(records);
        candidates.truncate(limit);
        log::debug!("directory returned {} usable breweries", candidates.len());
        Ok(candidates)
    }
}
