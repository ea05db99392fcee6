//! Process-local implementation of the URL repository.

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use std::collections::HashMap;

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::domain::repositories::UrlRepository;
use crate::error::StoreError;

#[derive(Debug, Default)]
struct Inner {
    next_id: i64,
    by_short: HashMap<String, UrlRecord>,
    /// canonical URL -> short alias
    by_canonical: HashMap<String, String>,
}

/// In-memory store keyed by both short alias and canonical URL.
///
/// Both indexes are updated under a single write lock, so it offers the same
/// insert-if-absent guarantee as the PostgreSQL schema. Contents are lost when
/// the process exits; use it for tests and local runs (`STORE=memory`).
#[derive(Debug, Default)]
pub struct InMemoryUrlRepository {
    inner: RwLock<Inner>,
}

impl InMemoryUrlRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UrlRepository for InMemoryUrlRepository {
    async fn find_by_long_url(
        &self,
        canonical_url: &str,
    ) -> Result<Option<UrlRecord>, StoreError> {
        let inner = self.inner.read();

        Ok(inner
            .by_canonical
            .get(canonical_url)
            .and_then(|short| inner.by_short.get(short))
            .cloned())
    }

    async fn find_by_short(&self, short: &str) -> Result<Option<UrlRecord>, StoreError> {
        Ok(self.inner.read().by_short.get(short).cloned())
    }

    async fn insert_if_absent(&self, new_record: NewUrlRecord) -> Result<UrlRecord, StoreError> {
        let mut inner = self.inner.write();

        if let Some(existing) = inner
            .by_canonical
            .get(&new_record.canonical_url)
            .and_then(|short| inner.by_short.get(short))
        {
            return Ok(existing.clone());
        }

        if inner.by_short.contains_key(&new_record.short) {
            return Err(StoreError::AliasTaken(new_record.short));
        }

        inner.next_id += 1;
        let record = UrlRecord::new(
            inner.next_id,
            new_record.short,
            new_record.long_url,
            new_record.canonical_url,
            Utc::now(),
        );

        inner
            .by_canonical
            .insert(record.canonical_url.clone(), record.short.clone());
        inner.by_short.insert(record.short.clone(), record.clone());

        Ok(record)
    }

    async fn count(&self) -> Result<i64, StoreError> {
        Ok(self.inner.read().by_short.len() as i64)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
