//! Place-name lookup backed by Nominatim.

mod http;
pub mod nominatim;

pub use http::{DEFAULT_GEOCODER_URL, HttpGeocoder, HttpGeocoderConfig};
