//! Facade crate for nearbeer, the walking brewery crawl planner.
//!
//! This crate re-exports the core domain types and, behind the `data`
//! feature, the Open Brewery DB and Nominatim adapters.

#![forbid(unsafe_code)]

pub use nearbeer_core::{
    Candidate, Coordinate, CoordinateError, Crawl, CrawlError, CrawlId, CrawlRequest,
    CrawlRequestError, CrawlStore, CrawlStoreError, GeocodeError, GeocodedPlace, Geocoder,
    NewCrawl, PlanError, PlannedCrawl, RouteBuilder, RouteOutcome, Stop, UserId, VenueSource,
    VenueSourceError, build_route, haversine_km, plan_crawl, route_length_km,
};

#[cfg(feature = "data")]
pub use nearbeer_data::{
    ClientBuildError, HttpGeocoder, HttpGeocoderConfig, HttpVenueDirectory,
    HttpVenueDirectoryConfig, JsonFileVenueDirectory,
};
