//! HTTP `Geocoder` using Nominatim's search endpoint.
//!
//! Nominatim's usage policy requires an identifying user agent, which every
//! request carries. Only the best match is requested (`limit=1`).

use std::time::Duration;

use nearbeer_core::{GeocodeError, GeocodedPlace, Geocoder};
use url::Url;

use super::nominatim::{NominatimPlace, first_match};
use crate::http::{
    BlockingClient, ClientBuildError, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, endpoint,
};

/// Public Nominatim instance.
pub const DEFAULT_GEOCODER_URL: &str = "https://nominatim.openstreetmap.org";

/// Configuration for [`HttpGeocoder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpGeocoderConfig {
    /// Service root, e.g. `"https://nominatim.openstreetmap.org"`.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
    /// User agent sent with every request.
    pub user_agent: String,
}

impl Default for HttpGeocoderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_GEOCODER_URL.to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

impl HttpGeocoderConfig {
    /// Create a configuration for the given service root.
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

/// Blocking Nominatim client.
#[derive(Debug)]
pub struct HttpGeocoder {
    client: BlockingClient,
    endpoint: Url,
}

impl HttpGeocoder {
    /// Create a geocoder with default settings.
    ///
    /// # Errors
    ///
    /// Returns [`ClientBuildError`] when the URL is invalid or the HTTP
    /// client or runtime fails to build.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientBuildError> {
        Self::with_config(&HttpGeocoderConfig::new(base_url))
    }

    /// Create a geocoder with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClientBuildError`] when the URL is invalid or the HTTP
    /// client or runtime fails to build.
    pub fn with_config(config: &HttpGeocoderConfig) -> Result<Self, ClientBuildError> {
        let endpoint = endpoint(&config.base_url, "search")?;
        let client = BlockingClient::new(&config.user_agent, config.timeout)?;
        Ok(Self { client, endpoint })
    }

    fn query_url(&self, query: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("q", query)
            .append_pair("format", "json")
            .append_pair("limit", "1");
        url
    }
}

impl Geocoder for HttpGeocoder {
    fn geocode(&self, query: &str) -> Result<GeocodedPlace, GeocodeError> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return Err(GeocodeError::EmptyQuery);
        }
        let url = self.query_url(trimmed);
        log::debug!("geocoding {trimmed:?} via {url}");
        let places: Vec<NominatimPlace> = self
            .client
            .get_json(&url, |message| GeocodeError::Parse { message })?;
        first_match(places, trimmed)
    }
}
