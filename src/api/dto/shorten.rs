//! Query parameters for the shortening endpoint.

use serde::Deserialize;

/// `PUT /?url=<long URL>`
#[derive(Debug, Deserialize)]
pub struct ShortenParams {
    /// The long URL to shorten. Optional here so a missing value is reported
    /// with the same error body as an invalid one.
    pub url: Option<String>,
}
