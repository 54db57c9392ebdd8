//! Named crawls persisted on behalf of a user.
//!
//! A [`Crawl`] is the stored form of a route. The core defines its shape and
//! validation rules; storing it is the job of a [`CrawlStore`](crate::CrawlStore).

use chrono::{DateTime, Utc};
use geo::{Coord, Rect};
use thiserror::Error;
use uuid::Uuid;

use crate::Stop;

/// Opaque identifier of an authenticated user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct UserId(String);

impl UserId {
    /// Wrap an identifier issued by the identity provider.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Identifier of a stored crawl.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct CrawlId(Uuid);

impl CrawlId {
    /// Generate a fresh random identifier.
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl From<Uuid> for CrawlId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for CrawlId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Errors returned by [`NewCrawl::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CrawlError {
    /// The name was empty or whitespace.
    #[error("crawl name must not be blank")]
    MissingName,
    /// No stops were supplied.
    #[error("crawl must contain at least one stop")]
    NoStops,
    /// A stop's `order` did not match its position.
    #[error("stop at position {position} has order {order}")]
    UnorderedStops {
        /// Index of the offending stop.
        position: usize,
        /// The order value it carried.
        order: usize,
    },
}

/// Request to persist a generated set of stops under a name.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NewCrawl {
    /// User-facing name.
    pub name: String,
    /// Stops in route order.
    pub stops: Vec<Stop>,
}

impl NewCrawl {
    /// Create a crawl request.
    #[must_use]
    pub fn new(name: impl Into<String>, stops: Vec<Stop>) -> Self {
        Self {
            name: name.into(),
            stops,
        }
    }

    /// Check the name and stop ordering.
    ///
    /// # Errors
    ///
    /// Returns [`CrawlError`] when the name is blank, there are no stops, or
    /// the stops' `order` values are not `0, 1, 2, ...`.
    pub fn validate(&self) -> Result<(), CrawlError> {
        if self.name.trim().is_empty() {
            return Err(CrawlError::MissingName);
        }
        if self.stops.is_empty() {
            return Err(CrawlError::NoStops);
        }
        self.stops
            .iter()
            .enumerate()
            .find(|(position, stop)| stop.order != *position)
            .map_or(Ok(()), |(position, stop)| {
                Err(CrawlError::UnorderedStops {
                    position,
                    order: stop.order,
                })
            })
    }
}

/// A stored crawl owned by a user.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Crawl {
    /// Store-assigned identifier.
    pub id: CrawlId,
    /// Owning user.
    pub owner: UserId,
    /// User-facing name.
    pub name: String,
    /// Stops in route order.
    pub stops: Vec<Stop>,
    /// Creation time; never changes after creation.
    pub created_at: DateTime<Utc>,
}

impl Crawl {
    /// Validate `new` and stamp it with an id, owner and creation time.
    ///
    /// # Errors
    ///
    /// Propagates [`NewCrawl::validate`] failures.
    pub fn create(
        owner: UserId,
        new: NewCrawl,
        created_at: DateTime<Utc>,
    ) -> Result<Self, CrawlError> {
        new.validate()?;
        Ok(Self {
            id: CrawlId::random(),
            owner,
            name: new.name,
            stops: new.stops,
            created_at,
        })
    }

    /// Stops sorted by `order`, as needed when replaying a loaded crawl.
    #[must_use]
    pub fn sorted_stops(&self) -> Vec<Stop> {
        let mut stops = self.stops.clone();
        stops.sort_by_key(|stop| stop.order);
        stops
    }

    /// Bounding rectangle of all stops (`x = longitude`, `y = latitude`).
    ///
    /// Presentation layers use this to frame a map around the crawl.
    #[must_use]
    pub fn bounds(&self) -> Option<Rect<f64>> {
        let mut coords = self.stops.iter().map(|stop| Coord::from(stop.coordinate()));
        let first = coords.next()?;
        Some(coords.fold(Rect::new(first, first), |rect, coord| {
            let min = rect.min();
            let max = rect.max();
            Rect::new(
                Coord {
                    x: min.x.min(coord.x),
                    y: min.y.min(coord.y),
                },
                Coord {
                    x: max.x.max(coord.x),
                    y: max.y.max(coord.y),
                },
            )
        }))
    }
}
