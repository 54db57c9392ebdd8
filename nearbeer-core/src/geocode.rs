//! Resolving place names to coordinates.

use thiserror::Error;

use crate::Coordinate;

/// A place name resolved to a single coordinate.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct GeocodedPlace {
    /// Resolved location.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub coordinate: Coordinate,
    /// Human-readable description returned by the geocoder.
    pub display_name: String,
}

/// Errors from [`Geocoder::geocode`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeocodeError {
    /// The query was empty or whitespace.
    #[error("a place name is required")]
    EmptyQuery,
    /// Nothing matched the query.
    #[error("could not find a location for {query:?}")]
    NotFound {
        /// The query as given.
        query: String,
    },
    /// The geocoder returned coordinates that do not form a valid location.
    #[error("geocoder returned invalid coordinates ({lat:?}, {lon:?})")]
    InvalidCoordinates {
        /// Raw latitude text.
        lat: String,
        /// Raw longitude text.
        lon: String,
    },
    /// The request exceeded its deadline.
    #[error("request to {url} timed out after {timeout_secs}s")]
    Timeout {
        /// URL that timed out.
        url: String,
        /// Configured timeout in seconds.
        timeout_secs: u64,
    },
    /// The geocoder answered with a non-success status.
    #[error("geocoder at {url} returned HTTP {status}: {message}")]
    Http {
        /// Requested URL.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Underlying error text.
        message: String,
    },
    /// The geocoder could not be reached.
    #[error("failed to reach geocoder at {url}: {message}")]
    Network {
        /// Requested URL.
        url: String,
        /// Underlying error text.
        message: String,
    },
    /// The payload could not be decoded.
    #[error("failed to decode geocoder response: {message}")]
    Parse {
        /// Decoder error text.
        message: String,
    },
}

/// Resolve a free-text place name (e.g. a city) to one coordinate.
///
/// Implementations must return [`GeocodeError::EmptyQuery`] for blank input
/// without contacting any service.
pub trait Geocoder: Send + Sync {
    /// Resolve `query` to its best match.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError`] when the query is blank, nothing matches, or
    /// the service fails.
    fn geocode(&self, query: &str) -> Result<GeocodedPlace, GeocodeError>;
}
