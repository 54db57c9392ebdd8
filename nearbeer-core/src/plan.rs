//! End-to-end crawl planning: fetch candidates, then build the route.

use thiserror::Error;

use crate::{CrawlRequest, RouteBuilder, RouteOutcome, Stop, VenueSource, VenueSourceError};

/// Errors returned by [`plan_crawl`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    /// The venue source failed to supply candidates.
    #[error("failed to fetch candidate venues: {0}")]
    Venues(#[from] VenueSourceError),
}

/// A planned crawl and how it measures up to the request.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlannedCrawl {
    /// Stops in walking order.
    pub stops: Vec<Stop>,
    /// Whether the crawl is empty, partial or complete.
    pub outcome: RouteOutcome,
}

/// Plan a crawl for `request` using candidates from `source`.
///
/// Fetches [`CrawlRequest::candidate_pool_size`] candidates so the builder
/// has room to form a tight cluster, then runs `builder`. Running out of
/// walkable venues is reported through [`PlannedCrawl::outcome`], not as an
/// error.
///
/// # Errors
///
/// Returns [`PlanError::Venues`] when the venue source fails.
///
/// # Examples
/// ```
/// use nearbeer_core::{
///     Candidate, Coordinate, CrawlRequest, RouteBuilder, RouteOutcome, plan_crawl,
///     test_support::MemoryVenueSource,
/// };
///
/// let here = Coordinate::new(33.75, -84.39)?;
/// let source = MemoryVenueSource::with_candidates([Candidate::new("a", "A", here, "")]);
/// let request = CrawlRequest::new(here, 3)?;
///
/// let planned = plan_crawl(&request, &source, &RouteBuilder::default())?;
/// assert_eq!(planned.outcome, RouteOutcome::Partial { found: 1, requested: 3 });
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn plan_crawl(
    request: &CrawlRequest,
    source: &dyn VenueSource,
    builder: &RouteBuilder,
) -> Result<PlannedCrawl, PlanError> {
    let pool = request.candidate_pool_size();
    let candidates = source.candidates_near(request.origin(), pool)?;
    log::debug!(
        "venue source returned {} of {pool} requested candidates",
        candidates.len()
    );

    let stops = builder.build(request.origin(), &candidates, request.count());
    let outcome = RouteOutcome::classify(stops.len(), request.count());
    log::info!("{outcome}");
    Ok(PlannedCrawl { stops, outcome })
}
