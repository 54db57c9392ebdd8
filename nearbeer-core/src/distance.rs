//! Great-circle distances between coordinates.

use crate::Coordinate;

/// Mean Earth radius used for every distance in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between `a` and `b` in kilometres.
///
/// Uses the `atan2` form of the haversine so that both tiny and antipodal
/// separations stay numerically stable.
///
/// # Examples
/// ```
/// use nearbeer_core::{Coordinate, haversine_km};
///
/// let a = Coordinate::new(0.0, 0.0)?;
/// let b = Coordinate::new(0.0, 1.0)?;
/// let km = haversine_km(a, b);
/// assert!((km - 111.19).abs() < 0.01);
/// # Ok::<(), nearbeer_core::CoordinateError>(())
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "great-circle distance is inherently floating-point"
)]
pub fn haversine_km(a: Coordinate, b: Coordinate) -> f64 {
    let lat_a = a.lat().to_radians();
    let lat_b = b.lat().to_radians();
    let half_d_lat = (b.lat() - a.lat()).to_radians() / 2.0;
    let half_d_lng = (b.lng() - a.lng()).to_radians() / 2.0;

    // Rounding can push `h` a hair past 1 for antipodal points.
    let h = (half_d_lat.sin().powi(2) + lat_a.cos() * lat_b.cos() * half_d_lng.sin().powi(2))
        .clamp(0.0, 1.0);
    let central_angle = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * central_angle
}
