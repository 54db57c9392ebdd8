//! Offline `VenueSource` over a JSON dump of Open Brewery DB records.

use camino::Utf8Path;
use nearbeer_core::{Candidate, Coordinate, VenueSource, VenueSourceError, haversine_km};

use super::openbrewerydb::{BreweryRecord, candidates_from_records};
use crate::fs::{JsonFileError, read_json};

/// Brewery records loaded once from a JSON array on disk.
///
/// Unlike the live API a dump carries no ranking, so every query sorts the
/// loaded candidates by great-circle distance from the origin. Ties keep the
/// file's order.
#[derive(Debug, Clone, Default)]
pub struct JsonFileVenueDirectory {
    candidates: Vec<Candidate>,
}

impl JsonFileVenueDirectory {
    /// Load a dump from `path`. Records without usable coordinates are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`JsonFileError`] when the file cannot be opened or is not a
    /// JSON array of brewery records.
    pub fn open(path: &Utf8Path) -> Result<Self, JsonFileError> {
        let records: Vec<BreweryRecord> = read_json(path)?;
        let total = records.len();
        let candidates = candidates_from_records(records);
        log::info!(
            "loaded {} of {total} breweries from {path}",
            candidates.len()
        );
        Ok(Self { candidates })
    }

    /// Build a directory from already-mapped candidates.
    #[must_use]
    pub fn from_candidates<I>(candidates: I) -> Self
    where
        I: IntoIterator<Item = Candidate>,
    {
        Self {
            candidates: candidates.into_iter().collect(),
        }
    }

    /// Number of locatable breweries held.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Whether the directory holds no breweries.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

impl VenueSource for JsonFileVenueDirectory {
    fn candidates_near(
        &self,
        origin: Coordinate,
        limit: usize,
    ) -> Result<Vec<Candidate>, VenueSourceError> {
        let mut ranked: Vec<(f64, &Candidate)> = self
            .candidates
            .iter()
            .map(|candidate| (haversine_km(origin, candidate.coordinate), candidate))
            .collect();
        ranked.sort_by(|a, b| a.0.total_cmp(&b.0));
        Ok(ranked
            .into_iter()
            .take(limit)
            .map(|(_, candidate)| candidate.clone())
            .collect())
    }
}
