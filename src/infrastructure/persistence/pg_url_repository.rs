//! PostgreSQL implementation of the URL repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;
use tracing::debug;

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::domain::repositories::UrlRepository;
use crate::error::StoreError;

#[derive(sqlx::FromRow)]
struct UrlRow {
    id: i64,
    short: String,
    long_url: String,
    canonical_url: String,
    created_at: DateTime<Utc>,
}

impl From<UrlRow> for UrlRecord {
    fn from(row: UrlRow) -> Self {
        UrlRecord::new(
            row.id,
            row.short,
            row.long_url,
            row.canonical_url,
            row.created_at,
        )
    }
}

/// PostgreSQL repository for URL records.
///
/// Uniqueness of both `short` and `canonical_url` is enforced by the schema
/// (see `migrations/`), which is what makes [`UrlRepository::insert_if_absent`]
/// race-free across processes.
pub struct PgUrlRepository {
    pool: Arc<PgPool>,
}

impl PgUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UrlRepository for PgUrlRepository {
    async fn find_by_long_url(
        &self,
        canonical_url: &str,
    ) -> Result<Option<UrlRecord>, StoreError> {
        let row = sqlx::query_as::<_, UrlRow>(
            r#"
            SELECT id, short, long_url, canonical_url, created_at
            FROM urls
            WHERE canonical_url = $1
            LIMIT 1
            "#,
        )
        .bind(canonical_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(UrlRecord::from))
    }

    async fn find_by_short(&self, short: &str) -> Result<Option<UrlRecord>, StoreError> {
        let row = sqlx::query_as::<_, UrlRow>(
            r#"
            SELECT id, short, long_url, canonical_url, created_at
            FROM urls
            WHERE short = $1
            LIMIT 1
            "#,
        )
        .bind(short)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(UrlRecord::from))
    }

    async fn insert_if_absent(&self, new_record: NewUrlRecord) -> Result<UrlRecord, StoreError> {
        // A conflict on canonical_url is absorbed here; a conflict on short
        // still raises and is reported as AliasTaken.
        let inserted = sqlx::query_as::<_, UrlRow>(
            r#"
            INSERT INTO urls (short, long_url, canonical_url)
            VALUES ($1, $2, $3)
            ON CONFLICT (canonical_url) DO NOTHING
            RETURNING id, short, long_url, canonical_url, created_at
            "#,
        )
        .bind(&new_record.short)
        .bind(&new_record.long_url)
        .bind(&new_record.canonical_url)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(|e| StoreError::from_insert(e, &new_record.short))?;

        if let Some(row) = inserted {
            return Ok(row.into());
        }

        // Lost the race (or the URL was mapped all along). The winner is
        // committed by now, so a fresh statement can see it.
        debug!(
            "canonical URL {} already mapped, reading existing record",
            new_record.canonical_url
        );
        self.find_by_long_url(&new_record.canonical_url)
            .await?
            .ok_or_else(|| StoreError::Unavailable(sqlx::Error::RowNotFound))
    }

    async fn count(&self) -> Result<i64, StoreError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM urls")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }
}
