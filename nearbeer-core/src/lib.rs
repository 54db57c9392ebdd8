//! Core domain types and crawl construction for nearbeer.
//!
//! The crate turns a ranked pool of nearby venues into a short walking crawl.
//! [`build_route`] holds the algorithm; everything that talks to the outside
//! world (venue directories, geocoders, crawl storage) is expressed as a trait
//! so adapters can live in other crates.
#![forbid(unsafe_code)]

mod candidate;
mod coordinate;
mod crawl;
mod distance;
mod geocode;
mod plan;
mod request;
mod route_builder;
mod store;
mod venue;

#[doc(hidden)]
pub mod test_support;

pub use candidate::{Candidate, Stop};
pub use coordinate::{Coordinate, CoordinateError, MAX_LATITUDE, MAX_LONGITUDE};
pub use crawl::{Crawl, CrawlError, CrawlId, NewCrawl, UserId};
pub use distance::{EARTH_RADIUS_KM, haversine_km};
pub use geocode::{GeocodeError, GeocodedPlace, Geocoder};
pub use plan::{PlanError, PlannedCrawl, plan_crawl};
pub use request::{
    CANDIDATE_POOL_FACTOR, CrawlRequest, CrawlRequestError, DEFAULT_STOP_COUNT, MAX_STOP_COUNT,
    MIN_CANDIDATE_POOL,
};
pub use route_builder::{
    DEFAULT_MAX_STEP_KM, RouteBuilder, RouteOutcome, build_route, route_length_km,
};
pub use store::{CrawlStore, CrawlStoreError};
pub use venue::{VenueSource, VenueSourceError};
