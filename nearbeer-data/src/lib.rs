//! Data adapters for nearbeer.
//!
//! Responsibilities:
//! - Implement `VenueSource` over Open Brewery DB, live or from a JSON dump.
//! - Implement `Geocoder` over Nominatim.
//! - Decode the external wire formats into core types.
//!
//! Boundaries:
//! - Do not encode crawl rules (live in `nearbeer-core`).
//! - Async HTTP is bridged onto the synchronous collaborator traits; callers
//!   never see a runtime.
//!
//! Invariants:
//! - Records without a valid location never reach the core.
//! - No global mutable state.
#![forbid(unsafe_code)]

pub mod directory;
pub mod fs;
pub mod geocoding;
mod http;

pub use directory::{HttpVenueDirectory, HttpVenueDirectoryConfig, JsonFileVenueDirectory};
pub use geocoding::{HttpGeocoder, HttpGeocoderConfig};
pub use http::{ClientBuildError, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};
