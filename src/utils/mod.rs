//! Utility functions for alias generation, URL processing, and database errors.
//!
//! - [`alias_generator`] - Random short alias generation and validation
//! - [`url_normalizer`] - URL canonicalization used as the deduplication key
//! - [`db_error`] - Classification of PostgreSQL constraint violations

pub mod alias_generator;
pub mod db_error;
pub mod url_normalizer;
