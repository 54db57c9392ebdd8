//! Sources of candidate venues.
//!
//! A [`VenueSource`] answers "which venues are near this point?" with a list
//! ranked by ascending distance from the point. The ranking seeds the crawl, so
//! implementations that cannot rank server-side must sort before returning.

use thiserror::Error;

use crate::{Candidate, Coordinate};

/// Errors from [`VenueSource::candidates_near`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VenueSourceError {
    /// The request exceeded its deadline.
    #[error("request to {url} timed out after {timeout_secs}s")]
    Timeout {
        /// URL that timed out.
        url: String,
        /// Configured timeout in seconds.
        timeout_secs: u64,
    },
    /// The directory answered with a non-success status.
    #[error("venue directory at {url} returned HTTP {status}: {message}")]
    Http {
        /// Requested URL.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Underlying error text.
        message: String,
    },
    /// The directory could not be reached.
    #[error("failed to reach venue directory at {url}: {message}")]
    Network {
        /// Requested URL.
        url: String,
        /// Underlying error text.
        message: String,
    },
    /// The payload could not be read or decoded.
    #[error("failed to decode venue data: {message}")]
    Parse {
        /// Decoder error text.
        message: String,
    },
}

/// Fetch candidate venues near a coordinate.
///
/// Implementations return at most `limit` candidates ordered by ascending
/// distance from `origin`. An empty list is a valid answer.
///
/// # Examples
/// ```
/// use nearbeer_core::{Candidate, Coordinate, VenueSource, VenueSourceError};
///
/// struct Single(Candidate);
///
/// impl VenueSource for Single {
///     fn candidates_near(
///         &self,
///         _origin: Coordinate,
///         limit: usize,
///     ) -> Result<Vec<Candidate>, VenueSourceError> {
///         Ok(std::iter::once(self.0.clone()).take(limit).collect())
///     }
/// }
///
/// let here = Coordinate::new(0.0, 0.0)?;
/// let source = Single(Candidate::new("a", "A", here, ""));
/// assert_eq!(source.candidates_near(here, 5)?.len(), 1);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait VenueSource: Send + Sync {
    /// Return up to `limit` candidates ranked by distance from `origin`.
    ///
    /// # Errors
    ///
    /// Returns [`VenueSourceError`] when the underlying directory fails.
    fn candidates_near(
        &self,
        origin: Coordinate,
        limit: usize,
    ) -> Result<Vec<Candidate>, VenueSourceError>;
}
