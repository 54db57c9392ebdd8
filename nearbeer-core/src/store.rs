//! Persistence boundary for named crawls.
//!
//! The [`CrawlStore`] trait describes what the application expects from a
//! crawl repository. Every operation is scoped to an owner: a crawl belonging
//! to another user behaves exactly like a missing one.

use thiserror::Error;

use crate::{Crawl, CrawlError, CrawlId, NewCrawl, UserId};

/// Errors returned by [`CrawlStore`] operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CrawlStoreError {
    /// The crawl failed validation.
    #[error(transparent)]
    Invalid(#[from] CrawlError),
    /// No crawl with this id belongs to the owner.
    #[error("crawl {0} not found")]
    NotFound(CrawlId),
    /// The storage backend failed.
    #[error("crawl storage failed: {message}")]
    Backend {
        /// Backend error text.
        message: String,
    },
}

/// Read and write named crawls for a user.
///
/// # Examples
///
/// ```rust
/// use nearbeer_core::{CrawlStore, UserId, test_support::MemoryCrawlStore};
///
/// let store = MemoryCrawlStore::default();
/// assert!(store.list(&UserId::new("u-1"))?.is_empty());
/// # Ok::<(), nearbeer_core::CrawlStoreError>(())
/// ```
pub trait CrawlStore: Send + Sync {
    /// All crawls owned by `owner`, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`CrawlStoreError::Backend`] when storage fails.
    fn list(&self, owner: &UserId) -> Result<Vec<Crawl>, CrawlStoreError>;

    /// Validate and store a new crawl for `owner`.
    ///
    /// # Errors
    ///
    /// Returns [`CrawlStoreError::Invalid`] when `crawl` fails
    /// [`NewCrawl::validate`], or a backend error.
    fn create(&self, owner: &UserId, crawl: NewCrawl) -> Result<Crawl, CrawlStoreError>;

    /// Fetch one crawl owned by `owner`.
    ///
    /// # Errors
    ///
    /// Returns [`CrawlStoreError::NotFound`] when the crawl is missing or
    /// owned by someone else.
    fn get(&self, owner: &UserId, id: CrawlId) -> Result<Crawl, CrawlStoreError>;

    /// Delete one crawl owned by `owner`, returning it.
    ///
    /// # Errors
    ///
    /// Returns [`CrawlStoreError::NotFound`] when the crawl is missing or
    /// owned by someone else.
    fn delete(&self, owner: &UserId, id: CrawlId) -> Result<Crawl, CrawlStoreError>;
}
