//! Handler for the liveness check.

use axum::http::StatusCode;

/// Reports that the process is up.
///
/// # Endpoint
///
/// `GET /health-check`
///
/// Always answers 200 with an empty body; the store is not consulted.
/// Other methods get 405 from the router.
pub async fn health_check_handler() -> StatusCode {
    StatusCode::OK
}
