//! In-memory collaborators used by unit and behaviour tests.

use std::sync::Mutex;

use chrono::Utc;

use crate::{
    Candidate, Coordinate, Crawl, CrawlId, CrawlStore, CrawlStoreError, GeocodeError,
    GeocodedPlace, Geocoder, NewCrawl, UserId, VenueSource, VenueSourceError,
};

/// In-memory `VenueSource` returning candidates in insertion order.
///
/// Callers must insert candidates already ranked by distance from the origin
/// they intend to query, as a distance-ranked directory API would return them.
#[derive(Default, Debug)]
pub struct MemoryVenueSource {
    candidates: Vec<Candidate>,
    last_limit: Mutex<Option<usize>>,
}

impl MemoryVenueSource {
    /// Create a source from pre-ranked candidates.
    #[must_use]
    pub fn with_candidates<I>(candidates: I) -> Self
    where
        I: IntoIterator<Item = Candidate>,
    {
        Self {
            candidates: candidates.into_iter().collect(),
            last_limit: Mutex::new(None),
        }
    }

    /// The `limit` passed to the most recent query.
    #[must_use]
    pub fn last_limit(&self) -> Option<usize> {
        self.last_limit.lock().ok().and_then(|guard| *guard)
    }
}

impl VenueSource for MemoryVenueSource {
    fn candidates_near(
        &self,
        _origin: Coordinate,
        limit: usize,
    ) -> Result<Vec<Candidate>, VenueSourceError> {
        if let Ok(mut guard) = self.last_limit.lock() {
            *guard = Some(limit);
        }
        Ok(self.candidates.iter().take(limit).cloned().collect())
    }
}

/// `VenueSource` that always fails with the configured error.
#[derive(Debug, Clone)]
pub struct FailingVenueSource {
    error: VenueSourceError,
}

impl FailingVenueSource {
    /// Create a source returning `error` for every query.
    #[must_use]
    pub const fn new(error: VenueSourceError) -> Self {
        Self { error }
    }
}

impl VenueSource for FailingVenueSource {
    fn candidates_near(
        &self,
        _origin: Coordinate,
        _limit: usize,
    ) -> Result<Vec<Candidate>, VenueSourceError> {
        Err(self.error.clone())
    }
}

/// `Geocoder` resolving exactly one place name, case-insensitively.
#[derive(Debug, Clone)]
pub struct FixedGeocoder {
    name: String,
    place: GeocodedPlace,
}

impl FixedGeocoder {
    /// Resolve `name` to `place`; every other query is not found.
    #[must_use]
    pub fn new(name: impl Into<String>, place: GeocodedPlace) -> Self {
        Self {
            name: name.into(),
            place,
        }
    }
}

impl Geocoder for FixedGeocoder {
    fn geocode(&self, query: &str) -> Result<GeocodedPlace, GeocodeError> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return Err(GeocodeError::EmptyQuery);
        }
        if trimmed.eq_ignore_ascii_case(&self.name) {
            Ok(self.place.clone())
        } else {
            Err(GeocodeError::NotFound {
                query: trimmed.to_owned(),
            })
        }
    }
}

/// In-memory `CrawlStore` stamping crawls with the current time.
#[derive(Default, Debug)]
pub struct MemoryCrawlStore {
    crawls: Mutex<Vec<Crawl>>,
}

impl MemoryCrawlStore {
    fn with_crawls<T>(
        &self,
        f: impl FnOnce(&mut Vec<Crawl>) -> Result<T, CrawlStoreError>,
    ) -> Result<T, CrawlStoreError> {
        let mut guard = self.crawls.lock().map_err(|err| CrawlStoreError::Backend {
            message: err.to_string(),
        })?;
        f(&mut guard)
    }
}

impl CrawlStore for MemoryCrawlStore {
    fn list(&self, owner: &UserId) -> Result<Vec<Crawl>, CrawlStoreError> {
        self.with_crawls(|crawls| {
            // Reverse first so crawls created in the same instant stay newest first.
            let mut owned: Vec<Crawl> = crawls
                .iter()
                .rev()
                .filter(|crawl| &crawl.owner == owner)
                .cloned()
                .collect();
            owned.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            Ok(owned)
        })
    }

    fn create(&self, owner: &UserId, crawl: NewCrawl) -> Result<Crawl, CrawlStoreError> {
        let created = Crawl::create(owner.clone(), crawl, Utc::now())?;
        self.with_crawls(|crawls| {
            crawls.push(created.clone());
            Ok(created)
        })
    }

    fn get(&self, owner: &UserId, id: CrawlId) -> Result<Crawl, CrawlStoreError> {
        self.with_crawls(|crawls| {
            crawls
                .iter()
                .find(|crawl| crawl.id == id && &crawl.owner == owner)
                .cloned()
                .ok_or(CrawlStoreError::NotFound(id))
        })
    }

    fn delete(&self, owner: &UserId, id: CrawlId) -> Result<Crawl, CrawlStoreError> {
        self.with_crawls(|crawls| {
            let position = crawls
                .iter()
                .position(|crawl| crawl.id == id && &crawl.owner == owner)
                .ok_or(CrawlStoreError::NotFound(id))?;
            Ok(crawls.remove(position))
        })
    }
}
