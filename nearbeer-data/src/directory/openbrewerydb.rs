//! Open Brewery DB record types and their mapping into candidates.
//!
//! Records arrive either from the `/breweries` endpoint or from a JSON dump of
//! the same shape. Coordinates have been published both as JSON numbers and
//! as strings, and are frequently missing; records without a usable location
//! are dropped.
//!
//! See: <https://www.openbrewerydb.org/documentation>

use nearbeer_core::{Candidate, Coordinate};
use serde::Deserialize;

/// A brewery as published by Open Brewery DB.
///
/// Only the fields needed to build a [`Candidate`] are decoded; everything
/// else is ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BreweryRecord {
    /// Directory identifier.
    pub id: String,
    /// Brewery name.
    #[serde(default)]
    pub name: String,
    /// First street address line.
    #[serde(default)]
    pub address_1: Option<String>,
    /// City.
    #[serde(default)]
    pub city: Option<String>,
    /// State or province.
    #[serde(default)]
    pub state_province: Option<String>,
    /// Postal code.
    #[serde(default)]
    pub postal_code: Option<String>,
    /// Latitude, when known.
    #[serde(default)]
    pub latitude: Option<Degrees>,
    /// Longitude, when known.
    #[serde(default)]
    pub longitude: Option<Degrees>,
}

/// A coordinate component encoded as a number or as text.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Degrees {
    /// Numeric encoding.
    Number(f64),
    /// Textual encoding, e.g. `"33.7490"`.
    Text(String),
}

impl Degrees {
    /// The value in degrees, if it parses to a finite number.
    #[must_use]
    pub fn value(&self) -> Option<f64> {
        let value = match self {
            Self::Number(value) => *value,
            Self::Text(text) => text.trim().parse().ok()?,
        };
        value.is_finite().then_some(value)
    }
}

impl BreweryRecord {
    /// Postal address as a single line: `"{street}, {city}, {state} {postcode}"`.
    ///
    /// Missing parts are left empty and the result is trimmed, so a record
    /// with no address data yields `", ,"`.
    #[must_use]
    pub fn formatted_address(&self) -> String {
        let part = |field: &Option<String>| field.as_deref().unwrap_or_default().to_owned();
        format!(
            "{}, {}, {} {}",
            part(&self.address_1),
            part(&self.city),
            part(&self.state_province),
            part(&self.postal_code),
        )
        .trim()
        .to_owned()
    }

    /// The record's location, if both components are present and valid.
    #[must_use]
    pub fn coordinate(&self) -> Option<Coordinate> {
        let lat = self.latitude.as_ref()?.value()?;
        let lng = self.longitude.as_ref()?.value()?;
        Coordinate::new(lat, lng).ok()
    }

    /// Convert into a [`Candidate`], or `None` when the location is unusable.
    #[must_use]
    pub fn into_candidate(self) -> Option<Candidate> {
        let coordinate = self.coordinate()?;
        let address = self.formatted_address();
        Some(Candidate::new(self.id, self.name, coordinate, address))
    }
}

/// Map records into candidates, preserving order and dropping unlocatable ones.
#[must_use]
pub fn candidates_from_records<I>(records: I) -> Vec<Candidate>
where
    I: IntoIterator<Item = BreweryRecord>,
{
    records
        .into_iter()
        .filter_map(|record| {
            let id = record.id.clone();
            let candidate = record.into_candidate();
            if candidate.is_none() {
                log::warn!("dropping brewery {id}: missing or invalid coordinates");
            }
            candidate
        })
        .collect()
}
