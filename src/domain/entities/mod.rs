//! Core domain entities.
//!
//! - [`UrlRecord`] - A stored alias mapping
//! - [`NewUrlRecord`] - Insert payload; the store assigns `id` and `created_at`

pub mod url_record;

pub use url_record::{NewUrlRecord, UrlRecord};
