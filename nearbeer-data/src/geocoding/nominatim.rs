//! Nominatim `/search` response types.
//!
//! Nominatim reports coordinates as decimal strings under `lat` and `lon`.
//!
//! See: <https://nominatim.org/release-docs/latest/api/Search/>

use nearbeer_core::{Coordinate, GeocodeError, GeocodedPlace};
use serde::Deserialize;

/// One entry of a `format=json` search response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NominatimPlace {
    /// Latitude as decimal text.
    pub lat: String,
    /// Longitude as decimal text.
    pub lon: String,
    /// Full human-readable name of the match.
    #[serde(default)]
    pub display_name: String,
}

impl NominatimPlace {
    /// Parse the coordinate text into a [`GeocodedPlace`].
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::InvalidCoordinates`] when either component is
    /// not a number or the pair lies outside the valid ranges.
    pub fn into_place(self) -> Result<GeocodedPlace, GeocodeError> {
        let parsed = self
            .lat
            .trim()
            .parse::<f64>()
            .ok()
            .zip(self.lon.trim().parse::<f64>().ok())
            .and_then(|(lat, lng)| Coordinate::new(lat, lng).ok());
        match parsed {
            Some(coordinate) => Ok(GeocodedPlace {
                coordinate,
                display_name: self.display_name,
            }),
            None => Err(GeocodeError::InvalidCoordinates {
                lat: self.lat,
                lon: self.lon,
            }),
        }
    }
}

/// Resolve the first match of a search response.
///
/// # Errors
///
/// Returns [`GeocodeError::NotFound`] for an empty response and
/// [`GeocodeError::InvalidCoordinates`] when the first match is unusable.
pub fn first_match(places: Vec<NominatimPlace>, query: &str) -> Result<GeocodedPlace, GeocodeError> {
    places
        .into_iter()
        .next()
        .ok_or_else(|| GeocodeError::NotFound {
            query: query.to_owned(),
        })?
        .into_place()
}
