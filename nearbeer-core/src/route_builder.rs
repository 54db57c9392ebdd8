//! Greedy construction of walkable crawls.
//!
//! The builder seeds the crawl with the first candidate (the venue closest to
//! the user, as ranked by the venue source) and then repeatedly hops to the
//! nearest unvisited candidate. The crawl ends as soon as the nearest hop is
//! longer than the walking threshold, when enough stops have been chosen, or
//! when candidates run out.

use std::fmt;

use crate::{Candidate, Coordinate, Stop, haversine_km};

/// Default longest hop, in kilometres, considered walkable.
pub const DEFAULT_MAX_STEP_KM: f64 = 1.5;

/// Build an ordered crawl from `candidates`.
///
/// `candidates` must already be ranked by ascending distance from `origin`;
/// the first element seeds the crawl regardless of `max_step_km`. Ties between
/// equally near candidates go to the one listed first. The caller's slice is
/// left untouched.
///
/// Returns an empty route when `candidates` is empty or `desired_count` is
/// zero. The result never holds more than `desired_count` stops and every hop
/// between consecutive stops is at most `max_step_km`.
///
/// Coordinates are validated on construction, so every candidate reaching
/// this function is finite and in range.
///
/// # Examples
/// ```
/// use nearbeer_core::{Candidate, Coordinate, build_route};
///
/// let at = |lat, lng| Coordinate::new(lat, lng).unwrap();
/// let candidates = vec![
///     Candidate::new("a", "A", at(0.0, 0.0), ""),
///     Candidate::new("b", "B", at(0.001, 0.001), ""),
///     Candidate::new("c", "C", at(10.0, 10.0), ""),
/// ];
///
/// let route = build_route(at(0.0, 0.0), &candidates, 3, 1.5);
/// let ids: Vec<_> = route.iter().map(|s| s.candidate.external_id.as_str()).collect();
/// assert_eq!(ids, ["a", "b"]);
/// ```
#[must_use]
pub fn build_route(
    origin: Coordinate,
    candidates: &[Candidate],
    desired_count: usize,
    max_step_km: f64,
) -> Vec<Stop> {
    let Some((seed, rest)) = candidates.split_first() else {
        return Vec::new();
    };
    if desired_count == 0 {
        return Vec::new();
    }

    let mut remaining: Vec<&Candidate> = rest.iter().collect();
    let mut route: Vec<&Candidate> = Vec::with_capacity(desired_count.min(candidates.len()));
    route.push(seed);
    let mut current = seed;

    while route.len() < desired_count {
        let Some((index, hop_km)) = nearest(current.coordinate, &remaining) else {
            break;
        };
        if hop_km > max_step_km {
            log::debug!(
                "nearest hop from {} is {hop_km:.3} km, over the {max_step_km} km limit",
                current.external_id
            );
            break;
        }
        current = remaining.remove(index);
        route.push(current);
    }

    log::debug!(
        "built crawl of {} of {desired_count} requested stops from {} candidates near ({}, {})",
        route.len(),
        candidates.len(),
        origin.lat(),
        origin.lng()
    );

    route
        .into_iter()
        .enumerate()
        .map(|(order, candidate)| Stop::new(candidate.clone(), order))
        .collect()
}

/// Index and distance of the candidate nearest to `from`.
///
/// Only a strictly smaller distance replaces the current best, so the first
/// of several equidistant candidates wins.
fn nearest(from: Coordinate, remaining: &[&Candidate]) -> Option<(usize, f64)> {
    remaining
        .iter()
        .enumerate()
        .map(|(index, candidate)| (index, haversine_km(from, candidate.coordinate)))
        .fold(None, |best, (index, distance)| match best {
            Some((_, best_distance)) if distance >= best_distance => best,
            _ => Some((index, distance)),
        })
}

/// Reusable crawl builder holding the walking threshold.
///
/// # Examples
/// ```
/// use nearbeer_core::{RouteBuilder, DEFAULT_MAX_STEP_KM};
///
/// let builder = RouteBuilder::default();
/// assert_eq!(builder.max_step_km(), DEFAULT_MAX_STEP_KM);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteBuilder {
    max_step_km: f64,
}

impl Default for RouteBuilder {
    fn default() -> Self {
        Self {
            max_step_km: DEFAULT_MAX_STEP_KM,
        }
    }
}

impl RouteBuilder {
    /// Create a builder with a custom walking threshold in kilometres.
    #[must_use]
    pub const fn new(max_step_km: f64) -> Self {
        Self { max_step_km }
    }

    /// Longest hop considered walkable.
    #[must_use]
    pub const fn max_step_km(&self) -> f64 {
        self.max_step_km
    }

    /// Build a crawl; see [`build_route`].
    #[must_use]
    pub fn build(
        &self,
        origin: Coordinate,
        candidates: &[Candidate],
        desired_count: usize,
    ) -> Vec<Stop> {
        build_route(origin, candidates, desired_count, self.max_step_km)
    }
}

/// How a built crawl compares with the number of stops requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "status", rename_all = "camelCase")
)]
pub enum RouteOutcome {
    /// No walkable stops were found.
    Empty,
    /// Fewer stops than requested.
    Partial {
        /// Stops in the crawl.
        found: usize,
        /// Stops requested.
        requested: usize,
    },
    /// The crawl has every requested stop.
    Complete {
        /// Stops in the crawl.
        stops: usize,
    },
}

impl RouteOutcome {
    /// Classify a crawl of `found` stops against `requested`.
    ///
    /// # Examples
    /// ```
    /// use nearbeer_core::RouteOutcome;
    ///
    /// assert_eq!(RouteOutcome::classify(0, 5), RouteOutcome::Empty);
    /// assert_eq!(
    ///     RouteOutcome::classify(3, 5),
    ///     RouteOutcome::Partial { found: 3, requested: 5 }
    /// );
    /// assert_eq!(RouteOutcome::classify(5, 5), RouteOutcome::Complete { stops: 5 });
    /// ```
    #[must_use]
    pub const fn classify(found: usize, requested: usize) -> Self {
        if found == 0 {
            Self::Empty
        } else if found < requested {
            Self::Partial { found, requested }
        } else {
            Self::Complete { stops: found }
        }
    }

    /// Whether the crawl has every requested stop.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        matches!(self, Self::Complete { .. })
    }
}

impl fmt::Display for RouteOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("no walkable beer spots found near this location"),
            Self::Partial { found, .. } => {
                write!(f, "only found {found} walkable beer spots near this location")
            }
            Self::Complete { stops } => write!(f, "generated a {stops}-stop walking crawl"),
        }
    }
}

/// Total walking distance along `stops` in kilometres.
#[must_use]
#[expect(clippy::float_arithmetic, reason = "summing hop distances")]
pub fn route_length_km(stops: &[Stop]) -> f64 {
    stops
        .windows(2)
        .filter_map(|pair| match pair {
            [from, to] => Some(haversine_km(from.coordinate(), to.coordinate())),
            _ => None,
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    fn at(lat: f64, lng: f64) -> Coordinate {
        Coordinate::new(lat, lng).expect("valid test coordinate")
    }

    fn candidate(id: &str, lat: f64, lng: f64) -> Candidate {
        Candidate::new(id, id.to_uppercase(), at(lat, lng), "")
    }

    fn ids(route: &[Stop]) -> Vec<&str> {
        route
            .iter()
            .map(|stop| stop.candidate.external_id.as_str())
            .collect()
    }

    #[fixture]
    fn cluster() -> Vec<Candidate> {
        vec![
            candidate("a", 0.0, 0.0),
            candidate("b", 0.001, 0.001),
            candidate("c", 10.0, 10.0),
        ]
    }

    #[rstest]
    fn far_candidate_is_excluded(cluster: Vec<Candidate>) {
        let route = build_route(at(0.0, 0.0), &cluster, 3, 1.5);
        assert_eq!(ids(&route), ["a", "b"]);
        let orders: Vec<_> = route.iter().map(|s| s.order).collect();
        assert_eq!(orders, [0, 1]);
    }

    #[rstest]
    #[case(0)]
    #[case(5)]
    fn empty_candidates_yield_empty_route(#[case] desired: usize) {
        assert!(build_route(at(0.0, 0.0), &[], desired, 1.5).is_empty());
    }

    #[rstest]
    fn zero_count_yields_empty_route(cluster: Vec<Candidate>) {
        assert!(build_route(at(0.0, 0.0), &cluster, 0, 1.5).is_empty());
    }

    #[rstest]
    #[case(0.0)]
    #[case(1.5)]
    #[case(1_000.0)]
    fn single_stop_is_the_seed(cluster: Vec<Candidate>, #[case] max_step_km: f64) {
        let route = build_route(at(5.0, 5.0), &cluster, 1, max_step_km);
        assert_eq!(ids(&route), ["a"]);
        assert_eq!(route[0].order, 0);
    }

    #[rstest]
    fn seed_ignores_hop_limit() {
        let far = vec![candidate("far", 45.0, 45.0), candidate("near", 0.0, 0.0)];
        let route = build_route(at(0.0, 0.0), &far, 2, 0.1);
        assert_eq!(ids(&route), ["far"]);
    }

    #[rstest]
    fn hops_to_nearest_rather_than_listed_order() {
        let candidates = vec![
            candidate("start", 0.0, 0.0),
            candidate("second_listed", 0.0, 0.008),
            candidate("nearest", 0.0, 0.002),
            candidate("middle", 0.0, 0.005),
        ];
        let route = build_route(at(0.0, 0.0), &candidates, 4, 1.5);
        assert_eq!(ids(&route), ["start", "nearest", "middle", "second_listed"]);
    }

    #[rstest]
    fn ties_go_to_first_remaining_candidate() {
        let candidates = vec![
            candidate("seed", 0.0, 0.0),
            candidate("east", 0.0, 0.001),
            candidate("west", 0.0, -0.001),
            candidate("east_twin", 0.0, 0.001),
        ];
        let route = build_route(at(0.0, 0.0), &candidates, 2, 1.5);
        assert_eq!(ids(&route), ["seed", "east"]);
    }

    #[rstest]
    fn stops_at_first_unwalkable_hop() {
        // From "b" the nearest is "c" (about 2.2 km); "d" is walkable from "c"
        // but never reached because the builder does not skip.
        let candidates = vec![
            candidate("a", 0.0, 0.0),
            candidate("b", 0.0, 0.01),
            candidate("c", 0.0, 0.03),
            candidate("d", 0.0, 0.035),
        ];
        let route = build_route(at(0.0, 0.0), &candidates, 4, 1.5);
        assert_eq!(ids(&route), ["a", "b"]);
    }

    #[rstest]
    fn stops_when_desired_count_reached(cluster: Vec<Candidate>) {
        let route = build_route(at(0.0, 0.0), &cluster, 2, 10_000.0);
        assert_eq!(ids(&route), ["a", "b"]);
    }

    #[rstest]
    fn exhausts_candidates_when_all_walkable(cluster: Vec<Candidate>) {
        let route = build_route(at(0.0, 0.0), &cluster, 10, 10_000.0);
        assert_eq!(ids(&route), ["a", "b", "c"]);
    }

    #[rstest]
    fn input_is_left_untouched(cluster: Vec<Candidate>) {
        let before = cluster.clone();
        let _ = build_route(at(0.0, 0.0), &cluster, 3, 1.5);
        assert_eq!(cluster, before);
    }

    #[rstest]
    fn shared_coordinates_are_both_visited() {
        let candidates = vec![
            candidate("taproom", 0.0, 0.0),
            candidate("bottle_shop", 0.0, 0.0),
        ];
        let route = build_route(at(0.0, 0.0), &candidates, 2, 0.0);
        assert_eq!(ids(&route), ["taproom", "bottle_shop"]);
    }

    #[rstest]
    fn builder_uses_configured_threshold(cluster: Vec<Candidate>) {
        let strict = RouteBuilder::new(0.1);
        assert_eq!(ids(&strict.build(at(0.0, 0.0), &cluster, 3)), ["a"]);
        let lenient = RouteBuilder::default();
        assert_eq!(ids(&lenient.build(at(0.0, 0.0), &cluster, 3)), ["a", "b"]);
    }

    #[rstest]
    #[case(0, 5, "no walkable beer spots found near this location")]
    #[case(2, 5, "only found 2 walkable beer spots near this location")]
    #[case(5, 5, "generated a 5-stop walking crawl")]
    fn outcome_messages(#[case] found: usize, #[case] requested: usize, #[case] message: &str) {
        assert_eq!(RouteOutcome::classify(found, requested).to_string(), message);
    }

    #[rstest]
    fn route_length_sums_hops(cluster: Vec<Candidate>) {
        let route = build_route(at(0.0, 0.0), &cluster, 3, 10_000.0);
        let expected = haversine_km(at(0.0, 0.0), at(0.001, 0.001))
            + haversine_km(at(0.001, 0.001), at(10.0, 10.0));
        assert!((route_length_km(&route) - expected).abs() < 1e-9);
        assert_eq!(route_length_km(&route[..1]), 0.0);
    }
}
