//! Validated WGS84 coordinates.
//!
//! Latitude and longitude are stored in decimal degrees. Construction rejects
//! non-finite values and anything outside the valid ranges so that distance
//! computations never see garbage.

use geo::{Coord, Point};
use thiserror::Error;

/// Inclusive latitude bound in degrees.
pub const MAX_LATITUDE: f64 = 90.0;
/// Inclusive longitude bound in degrees.
pub const MAX_LONGITUDE: f64 = 180.0;

/// A latitude/longitude pair in decimal degrees.
///
/// # Examples
/// ```
/// use nearbeer_core::Coordinate;
///
/// let brewery = Coordinate::new(33.749, -84.388)?;
/// assert_eq!(brewery.lat(), 33.749);
/// assert_eq!(brewery.lng(), -84.388);
/// # Ok::<(), nearbeer_core::CoordinateError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawCoordinate")
)]
pub struct Coordinate {
    lat: f64,
    lng: f64,
}

/// Errors returned by [`Coordinate::new`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CoordinateError {
    /// Latitude or longitude was NaN or infinite.
    #[error("coordinate ({lat}, {lng}) is not finite")]
    NonFinite {
        /// Supplied latitude.
        lat: f64,
        /// Supplied longitude.
        lng: f64,
    },
    /// Latitude fell outside `[-90, 90]`.
    #[error("latitude {0} is outside [-90, 90]")]
    LatitudeOutOfRange(f64),
    /// Longitude fell outside `[-180, 180]`.
    #[error("longitude {0} is outside [-180, 180]")]
    LongitudeOutOfRange(f64),
}

impl Coordinate {
    /// Validate and construct a coordinate.
    ///
    /// # Errors
    ///
    /// Returns [`CoordinateError`] when either component is non-finite or out
    /// of range.
    pub fn new(lat: f64, lng: f64) -> Result<Self, CoordinateError> {
        if !lat.is_finite() || !lng.is_finite() {
            return Err(CoordinateError::NonFinite { lat, lng });
        }
        if !(-MAX_LATITUDE..=MAX_LATITUDE).contains(&lat) {
            return Err(CoordinateError::LatitudeOutOfRange(lat));
        }
        if !(-MAX_LONGITUDE..=MAX_LONGITUDE).contains(&lng) {
            return Err(CoordinateError::LongitudeOutOfRange(lng));
        }
        Ok(Self { lat, lng })
    }

    /// Latitude in decimal degrees.
    #[must_use]
    pub const fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in decimal degrees.
    #[must_use]
    pub const fn lng(&self) -> f64 {
        self.lng
    }
}

impl From<Coordinate> for Coord<f64> {
    fn from(value: Coordinate) -> Self {
        Self {
            x: value.lng,
            y: value.lat,
        }
    }
}

impl From<Coordinate> for Point<f64> {
    fn from(value: Coordinate) -> Self {
        Self::from(Coord::from(value))
    }
}

impl TryFrom<Coord<f64>> for Coordinate {
    type Error = CoordinateError;

    /// Interpret a `geo` coordinate with `x = longitude`, `y = latitude`.
    fn try_from(value: Coord<f64>) -> Result<Self, Self::Error> {
        Self::new(value.y, value.x)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawCoordinate {
    lat: f64,
    lng: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawCoordinate> for Coordinate {
    type Error = CoordinateError;

    fn try_from(value: RawCoordinate) -> Result<Self, Self::Error> {
        Self::new(value.lat, value.lng)
    }
}
