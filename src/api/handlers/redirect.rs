//! Handlers for alias resolution.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short alias to its long URL.
///
/// # Endpoint
///
/// `GET /{alias}`
///
/// # Response Codes
///
/// - **301 Moved Permanently** with `Location: <long URL>`
/// - **404 Not Found** if the alias is unknown (no `Location` header)
/// - **500 Internal Server Error** if the store fails
pub async fn redirect_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let Some(record) = state.url_service.resolve_mapping(&alias).await? else {
        debug!("Alias {} not found", alias);
        return Err(AppError::not_found(
            "Short link not found",
            json!({ "alias": alias }),
        ));
    };

    // The submitted URL normally makes a valid header; the canonical form
    // always does, so fall back to it.
    let location = HeaderValue::from_str(&record.long_url)
        .or_else(|_| HeaderValue::from_str(&record.canonical_url))
        .map_err(|e| {
            AppError::internal(
                "Stored URL cannot be used as a redirect target",
                json!({ "alias": alias, "reason": e.to_string() }),
            )
        })?;

    debug!("Redirecting {} to {}", alias, record.long_url);

    Ok((StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)]).into_response())
}

/// `GET /` carries an empty alias, which never resolves.
pub async fn missing_alias_handler() -> AppError {
    AppError::not_found("Short link not found", json!({ "alias": "" }))
}
