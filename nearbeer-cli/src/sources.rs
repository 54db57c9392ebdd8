//! Construction of the collaborators a command talks to.
//!
//! Commands receive a [`SourcesBuilder`] so tests can substitute in-memory
//! doubles for the live directory and geocoder.

use nearbeer_core::{Geocoder, VenueSource};
use nearbeer_data::{HttpGeocoder, HttpGeocoderConfig, HttpVenueDirectory, JsonFileVenueDirectory};

use crate::CliError;
use crate::plan::VenueSettings;

/// Builds the venue source and geocoder for one invocation.
pub(crate) trait SourcesBuilder {
    fn venues(&self, settings: &VenueSettings) -> Result<Box<dyn VenueSource>, CliError>;
    fn geocoder(&self, config: &HttpGeocoderConfig) -> Result<Box<dyn Geocoder>, CliError>;
}

/// Live adapters from `nearbeer-data`.
pub(crate) struct DefaultSourcesBuilder;

impl SourcesBuilder for DefaultSourcesBuilder {
    fn venues(&self, settings: &VenueSettings) -> Result<Box<dyn VenueSource>, CliError> {
        match settings {
            VenueSettings::File(path) => Ok(Box::new(JsonFileVenueDirectory::open(path)?)),
            VenueSettings::Http(config) => {
                let directory = HttpVenueDirectory::with_config(config).map_err(|source| {
                    CliError::BuildClient {
                        base_url: config.base_url.clone(),
                        source,
                    }
                })?;
                Ok(Box::new(directory))
            }
        }
    }

    fn geocoder(&self, config: &HttpGeocoderConfig) -> Result<Box<dyn Geocoder>, CliError> {
        let geocoder =
            HttpGeocoder::with_config(config).map_err(|source| CliError::BuildClient {
                base_url: config.base_url.clone(),
                source,
            })?;
        Ok(Box::new(geocoder))
    }
}
