use nurl::domain::entities::NewUrlRecord;
use nurl::domain::repositories::UrlRepository;
use nurl::error::StoreError;
use nurl::infrastructure::persistence::PgUrlRepository;
use sqlx::PgPool;
use std::sync::Arc;

fn new_record(short: &str, long_url: &str, canonical_url: &str) -> NewUrlRecord {
    NewUrlRecord {
        short: short.to_string(),
        long_url: long_url.to_string(),
        canonical_url: canonical_url.to_string(),
    }
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_insert_and_find(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));

    let record = repo
        .insert_if_absent(new_record(
            "abc1234",
            "https://example.com",
            "https://example.com/",
        ))
        .await
        .unwrap();

    assert_eq!(record.short, "abc1234");
    assert_eq!(record.long_url, "https://example.com");
    assert!(record.id > 0);

    let by_short = repo.find_by_short("abc1234").await.unwrap().unwrap();
    assert_eq!(by_short, record);

    let by_long = repo
        .find_by_long_url("https://example.com/")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(by_long, record);
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_find_missing(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));

    assert!(repo.find_by_short("nothere").await.unwrap().is_none());
    assert!(
        repo.find_by_long_url("https://nothere.com/")
            .await
            .unwrap()
            .is_none()
    );
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_insert_existing_canonical_url_returns_existing(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));

    let first = repo
        .insert_if_absent(new_record("first01", "https://a.com", "https://a.com/"))
        .await
        .unwrap();
    let second = repo
        .insert_if_absent(new_record("second2", "HTTPS://A.COM", "https://a.com/"))
        .await
        .unwrap();

    assert_eq!(second, first);
    assert_eq!(repo.count().await.unwrap(), 1);
    assert!(repo.find_by_short("second2").await.unwrap().is_none());
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_insert_duplicate_alias_is_alias_taken(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));

    repo.insert_if_absent(new_record("same123", "https://a.com", "https://a.com/"))
        .await
        .unwrap();
    let result = repo
        .insert_if_absent(new_record("same123", "https://b.com", "https://b.com/"))
        .await;

    assert!(matches!(result, Err(StoreError::AliasTaken(alias)) if alias == "same123"));
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_concurrent_inserts_share_one_record(pool: PgPool) {
    let repo = Arc::new(PgUrlRepository::new(Arc::new(pool)));

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let repo = repo.clone();
            tokio::spawn(async move {
                repo.insert_if_absent(new_record(
                    &format!("race{i:03}"),
                    "https://race.com",
                    "https://race.com/",
                ))
                .await
                .unwrap()
                .short
            })
        })
        .collect();

    let mut shorts = Vec::new();
    for handle in handles {
        shorts.push(handle.await.unwrap());
    }
    shorts.dedup();

    assert_eq!(shorts.len(), 1);
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_ping(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));

    assert!(repo.ping().await.is_ok());
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_ping_fails_after_close(pool: PgPool) {
    pool.close().await;
    let repo = PgUrlRepository::new(Arc::new(pool));

    assert!(matches!(repo.ping().await, Err(StoreError::Unavailable(_))));
}
