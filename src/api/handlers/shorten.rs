//! Handler for the shortening endpoint.

use axum::extract::{Query, State};
use serde_json::json;

use crate::api::dto::shorten::ShortenParams;
use crate::error::AppError;
use crate::state::AppState;

/// Creates (or reuses) a short alias for a long URL.
///
/// # Endpoint
///
/// `PUT /?url=<long URL>`
///
/// # Response
///
/// `200 OK`, `text/plain`:
///
/// ```text
/// Shortened "http://example.com/page" to "http://localhost:8080/aB3dE5f"
/// ```
///
/// The quoted long URL is echoed exactly as received. Submitting the same
/// URL again returns the same alias.
///
/// # Errors
///
/// Returns 400 Bad Request if `url` is missing or not a valid HTTP(S) URL.
/// Returns 500 Internal Server Error if the store fails.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Query(params): Query<ShortenParams>,
) -> Result<String, AppError> {
    let long_url = params
        .url
        .filter(|url| !url.is_empty())
        .ok_or_else(|| AppError::bad_request("Missing 'url' query parameter", json!({})))?;

    let short = state.url_service.create_or_reuse_mapping(&long_url).await?;

    Ok(format!(
        "Shortened \"{}\" to \"{}\"\n",
        long_url,
        state.url_service.short_url(&short)
    ))
}
