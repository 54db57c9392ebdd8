//! Venue directories backed by Open Brewery DB.
//!
//! [`HttpVenueDirectory`] queries the live `/breweries` endpoint, which ranks
//! results by distance server-side. [`JsonFileVenueDirectory`] serves an
//! offline dump of the same records and ranks them locally.

mod file;
mod http;
pub mod openbrewerydb;

pub use file::JsonFileVenueDirectory;
pub use http::{
    DEFAULT_DIRECTORY_URL, HttpVenueDirectory, HttpVenueDirectoryConfig, MAX_PER_PAGE,
};
