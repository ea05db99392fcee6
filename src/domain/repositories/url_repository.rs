//! Repository trait for URL record storage.

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::error::StoreError;
use async_trait::async_trait;

/// Store interface for alias mappings.
///
/// Lookups are equality queries on the canonical long URL or on the short
/// alias. Inserts are atomic with respect to the canonical long URL, so two
/// concurrent first-time requests for the same URL end up sharing one record.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryUrlRepository`] - process-local store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Finds the record whose canonical long URL equals `canonical_url`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] on store errors.
    async fn find_by_long_url(&self, canonical_url: &str)
    -> Result<Option<UrlRecord>, StoreError>;

    /// Finds the record for a short alias.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] on store errors.
    async fn find_by_short(&self, short: &str) -> Result<Option<UrlRecord>, StoreError>;

    /// Inserts `new_record` unless a record with the same canonical URL exists.
    ///
    /// Returns the freshly inserted record, or the existing one when the
    /// canonical URL was already mapped (in which case `new_record.short` is
    /// discarded).
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::AliasTaken`] if `new_record.short` is used by a
    /// different record.
    /// Returns [`StoreError::Unavailable`] on store errors.
    async fn insert_if_absent(&self, new_record: NewUrlRecord) -> Result<UrlRecord, StoreError>;

    /// Counts stored records.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] on store errors.
    async fn count(&self) -> Result<i64, StoreError>;

    /// Checks that the store is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] if it is not.
    async fn ping(&self) -> Result<(), StoreError>;
}
