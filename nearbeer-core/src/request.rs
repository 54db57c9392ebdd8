//! Parameters for planning a crawl around a location.

use thiserror::Error;

use crate::Coordinate;

/// Stops requested when the caller does not say.
pub const DEFAULT_STOP_COUNT: usize = 5;
/// Largest number of stops a single crawl may request.
pub const MAX_STOP_COUNT: usize = 20;
/// Smallest candidate pool fetched from a venue source.
pub const MIN_CANDIDATE_POOL: usize = 20;
/// Candidates fetched per requested stop, leaving room for a tight cluster.
pub const CANDIDATE_POOL_FACTOR: usize = 3;

/// Errors returned by [`CrawlRequest::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CrawlRequestError {
    /// The stop count was zero or above [`MAX_STOP_COUNT`].
    #[error("stop count {0} is outside 1..={MAX_STOP_COUNT}")]
    CountOutOfRange(usize),
}

/// A request for a walking crawl starting near `origin`.
///
/// # Examples
/// ```
/// use nearbeer_core::{Coordinate, CrawlRequest};
///
/// let request = CrawlRequest::new(Coordinate::new(33.75, -84.39)?, 4)?;
/// assert_eq!(request.count(), 4);
/// assert_eq!(request.candidate_pool_size(), 20);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawCrawlRequest")
)]
pub struct CrawlRequest {
    origin: Coordinate,
    count: usize,
}

impl CrawlRequest {
    /// Validate and construct a request.
    ///
    /// # Errors
    ///
    /// Returns [`CrawlRequestError::CountOutOfRange`] unless
    /// `1 <= count <= MAX_STOP_COUNT`.
    pub fn new(origin: Coordinate, count: usize) -> Result<Self, CrawlRequestError> {
        if !(1..=MAX_STOP_COUNT).contains(&count) {
            return Err(CrawlRequestError::CountOutOfRange(count));
        }
        Ok(Self { origin, count })
    }

    /// A request for [`DEFAULT_STOP_COUNT`] stops.
    #[must_use]
    pub const fn with_default_count(origin: Coordinate) -> Self {
        Self {
            origin,
            count: DEFAULT_STOP_COUNT,
        }
    }

    /// Where the user is standing.
    #[must_use]
    pub const fn origin(&self) -> Coordinate {
        self.origin
    }

    /// Number of stops requested.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    /// How many candidates to fetch from the venue source.
    ///
    /// Three per requested stop, but never fewer than [`MIN_CANDIDATE_POOL`].
    #[must_use]
    pub fn candidate_pool_size(&self) -> usize {
        self.count
            .saturating_mul(CANDIDATE_POOL_FACTOR)
            .max(MIN_CANDIDATE_POOL)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawCrawlRequest {
    origin: Coordinate,
    #[serde(default = "default_count")]
    count: usize,
}

#[cfg(feature = "serde")]
const fn default_count() -> usize {
    DEFAULT_STOP_COUNT
}

#[cfg(feature = "serde")]
impl TryFrom<RawCrawlRequest> for CrawlRequest {
    type Error = CrawlRequestError;

    fn try_from(value: RawCrawlRequest) -> Result<Self, Self::Error> {
        Self::new(value.origin, value.count)
    }
}
