//! URL record entity: one alias-to-long-URL mapping.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A stored mapping between a short alias and a long URL.
///
/// Records are created once and never updated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UrlRecord {
    /// Store-generated record identifier.
    pub id: i64,
    /// Seven-character alphanumeric alias.
    pub short: String,
    /// The long URL exactly as it was submitted; used as the redirect target.
    pub long_url: String,
    /// Canonical form of `long_url`; unique across the store.
    pub canonical_url: String,
    pub created_at: DateTime<Utc>,
}

impl UrlRecord {
    /// Creates a new UrlRecord instance.
    pub fn new(
        id: i64,
        short: String,
        long_url: String,
        canonical_url: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            short,
            long_url,
            canonical_url,
            created_at,
        }
    }
}

/// Input data for inserting a new record.
///
/// `created_at` is assigned by the store at insertion time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUrlRecord {
    pub short: String,
    pub long_url: String,
    pub canonical_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_record_creation() {
        let now = Utc::now();
        let record = UrlRecord::new(
            1,
            "abc1234".to_string(),
            "http://example.com".to_string(),
            "http://example.com/".to_string(),
            now,
        );

        assert_eq!(record.id, 1);
        assert_eq!(record.short, "abc1234");
        assert_eq!(record.long_url, "http://example.com");
        assert_eq!(record.canonical_url, "http://example.com/");
        assert_eq!(record.created_at, now);
    }

    #[test]
    fn test_url_record_serializes_fields() {
        let record = UrlRecord::new(
            7,
            "Zz09aB1".to_string(),
            "https://rust-lang.org".to_string(),
            "https://rust-lang.org/".to_string(),
            Utc::now(),
        );

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["short"], "Zz09aB1");
        assert_eq!(json["long_url"], "https://rust-lang.org");
        assert!(json["created_at"].is_string());
    }
}
