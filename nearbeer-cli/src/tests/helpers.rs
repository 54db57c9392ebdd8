//! Test helpers for writing brewery dumps and substituting collaborators.

use camino::Utf8Path;
use nearbeer_core::test_support::FixedGeocoder;
use nearbeer_core::{Geocoder, VenueSource};
use nearbeer_data::HttpGeocoderConfig;
use serde_json::{Value, json};

use crate::CliError;
use crate::plan::VenueSettings;
use crate::sources::{DefaultSourcesBuilder, SourcesBuilder};

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path, contents).expect("write test file");
}

/// One Open Brewery DB record with textual coordinates.
pub(super) fn brewery(id: &str, name: &str, lat: f64, lng: f64) -> Value {
    json!({
        "id": id,
        "name": name,
        "brewery_type": "micro",
        "address_1": format!("{id} Church St"),
        "city": "Decatur",
        "state_province": "Georgia",
        "postal_code": "30030",
        "latitude": lat.to_string(),
        "longitude": lng.to_string(),
    })
}

pub(super) fn write_dump(path: &Utf8Path, records: &[Value]) {
    let payload = serde_json::to_vec_pretty(records).expect("serialise dump");
    write_utf8(path, &payload);
}

/// Reads breweries from disk as usual but resolves place names with a
/// fixed geocoder instead of Nominatim.
pub(super) struct StubGeocodingBuilder {
    pub(super) geocoder: FixedGeocoder,
}

impl SourcesBuilder for StubGeocodingBuilder {
    fn venues(&self, settings: &VenueSettings) -> Result<Box<dyn VenueSource>, CliError> {
        DefaultSourcesBuilder.venues(settings)
    }

    fn geocoder(&self, _config: &HttpGeocoderConfig) -> Result<Box<dyn Geocoder>, CliError> {
        Ok(Box::new(self.geocoder.clone()))
    }
}
