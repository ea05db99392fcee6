//! Alias assignment and lookup service.

use std::sync::Arc;

use serde_json::json;
use tracing::{debug, error, info, warn};

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::domain::repositories::UrlRepository;
use crate::error::{AppError, StoreError};
use crate::utils::alias_generator::{generate_alias, is_valid_alias};
use crate::utils::url_normalizer::canonicalize_url;

/// Default number of aliases tried before giving up on a create request.
pub const DEFAULT_ALIAS_MAX_ATTEMPTS: usize = 10;

/// Service for creating and resolving short aliases.
///
/// Deduplicates on the canonical form of the long URL, and allocates new
/// aliases with a bounded retry on collision.
pub struct UrlService {
    repository: Arc<dyn UrlRepository>,
    base_url: String,
    alias_max_attempts: usize,
}

impl UrlService {
    /// Creates a new service.
    ///
    /// `base_url` is prefixed verbatim to aliases when formatting short URLs,
    /// so it should end with `/`.
    pub fn new(repository: Arc<dyn UrlRepository>, base_url: impl Into<String>) -> Self {
        Self {
            repository,
            base_url: base_url.into(),
            alias_max_attempts: DEFAULT_ALIAS_MAX_ATTEMPTS,
        }
    }

    /// Overrides the number of alias allocation attempts (minimum 1).
    pub fn with_alias_max_attempts(mut self, attempts: usize) -> Self {
        self.alias_max_attempts = attempts.max(1);
        self
    }

    /// Returns the alias for `long_url`, creating a mapping if none exists.
    ///
    /// # Flow
    ///
    /// 1. Canonicalize the URL (rejects malformed input before any store access)
    /// 2. Return the alias of an existing record for the canonical URL
    /// 3. Otherwise generate an alias and insert `{short, long_url, canonical}`,
    ///    retrying with a fresh alias on collision
    ///
    /// The stored long URL is `long_url` as given; the canonical form is only
    /// the deduplication key.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is invalid.
    /// Returns [`AppError::Internal`] if the store is unavailable or no free
    /// alias was found within the attempt budget.
    pub async fn create_or_reuse_mapping(&self, long_url: &str) -> Result<String, AppError> {
        let canonical_url = canonicalize_url(long_url).map_err(|e| {
            AppError::bad_request("Invalid URL", json!({ "url": long_url, "reason": e.to_string() }))
        })?;

        if let Some(existing) = self
            .repository
            .find_by_long_url(&canonical_url)
            .await
            .inspect_err(|e| error!("Failed to look up {}: {}", canonical_url, e))?
        {
            debug!("Reusing alias {} for {}", existing.short, canonical_url);
            return Ok(existing.short);
        }

        let record = self.allocate(long_url, &canonical_url).await?;
        Ok(record.short)
    }

    /// Looks up the record for `short`.
    ///
    /// Aliases that could never have been generated are answered with `None`
    /// without touching the store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store is unavailable.
    pub async fn resolve_mapping(&self, short: &str) -> Result<Option<UrlRecord>, AppError> {
        if !is_valid_alias(short) {
            debug!("Rejecting malformed alias {:?}", short);
            return Ok(None);
        }

        let record = self
            .repository
            .find_by_short(short)
            .await
            .inspect_err(|e| error!("Failed to query alias {}: {}", short, e))?;

        Ok(record)
    }

    /// Formats the fully-qualified short URL for an alias.
    pub fn short_url(&self, short: &str) -> String {
        format!("{}{}", self.base_url, short)
    }

    /// Number of stored records.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store is unavailable.
    pub async fn count(&self) -> Result<i64, AppError> {
        Ok(self.repository.count().await?)
    }

    /// Checks store connectivity.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store is unavailable.
    pub async fn ping(&self) -> Result<(), AppError> {
        Ok(self.repository.ping().await?)
    }

    /// Inserts a record under a fresh alias, retrying on collision.
    ///
    /// Store failures abort immediately; only [`StoreError::AliasTaken`] is
    /// retried.
    async fn allocate(&self, long_url: &str, canonical_url: &str) -> Result<UrlRecord, AppError> {
        for attempt in 1..=self.alias_max_attempts {
            let new_record = NewUrlRecord {
                short: generate_alias(),
                long_url: long_url.to_string(),
                canonical_url: canonical_url.to_string(),
            };

            match self.repository.insert_if_absent(new_record).await {
                Ok(record) => {
                    info!("Mapped {} to alias {}", canonical_url, record.short);
                    return Ok(record);
                }
                Err(StoreError::AliasTaken(alias)) => {
                    warn!(
                        "Alias {} already taken (attempt {}/{})",
                        alias, attempt, self.alias_max_attempts
                    );
                }
                Err(e) => {
                    error!("Failed to store {}: {}", canonical_url, e);
                    return Err(e.into());
                }
            }
        }

        Err(AppError::internal(
            "Failed to allocate a unique alias",
            json!({ "attempts": self.alias_max_attempts }),
        ))
    }
}
