//! Venues eligible for a crawl and the stops chosen from them.

use crate::Coordinate;

/// A venue that may be included in a crawl.
///
/// Produced by a [`VenueSource`](crate::VenueSource) and treated as immutable
/// by the route builder. Several candidates may share a coordinate.
///
/// # Examples
/// ```
/// use nearbeer_core::{Candidate, Coordinate};
///
/// let candidate = Candidate::new(
///     "b-1",
///     "Monday Night Brewing",
///     Coordinate::new(33.78, -84.42)?,
///     "670 Trabert Ave NW, Atlanta, Georgia 30318",
/// );
/// assert_eq!(candidate.external_id, "b-1");
/// # Ok::<(), nearbeer_core::CoordinateError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Candidate {
    /// Opaque identifier assigned by the venue directory.
    pub external_id: String,
    /// Display name.
    pub name: String,
    /// Venue location.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub coordinate: Coordinate,
    /// Free-text postal address.
    pub address: String,
}

impl Candidate {
    /// Construct a candidate.
    #[must_use]
    pub fn new(
        external_id: impl Into<String>,
        name: impl Into<String>,
        coordinate: Coordinate,
        address: impl Into<String>,
    ) -> Self {
        Self {
            external_id: external_id.into(),
            name: name.into(),
            coordinate,
            address: address.into(),
        }
    }
}

/// A candidate placed at a fixed position in a crawl.
///
/// Stops are created by [`build_route`](crate::build_route) only; `order` is
/// the 0-based index of the stop in the route it belongs to.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stop {
    /// The venue visited at this stop.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub candidate: Candidate,
    /// Position of the stop in its route.
    pub order: usize,
}

impl Stop {
    pub(crate) const fn new(candidate: Candidate, order: usize) -> Self {
        Self { candidate, order }
    }

    /// Location of the venue.
    #[must_use]
    pub const fn coordinate(&self) -> Coordinate {
        self.candidate.coordinate
    }
}
