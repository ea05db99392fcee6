//! Request router.
//!
//! # Route Structure
//!
//! - `GET  /health-check` - Liveness check
//! - `PUT  /?url=<long>`  - Create or reuse a short alias
//! - `GET  /{alias}`      - Redirect to the long URL
//!
//! Any other method on these paths is answered with 405 Method Not Allowed.

use crate::api::handlers::{
    health_check_handler, missing_alias_handler, redirect_handler, shorten_handler,
};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::{get, put};

/// Constructs the application router with all routes and middleware.
///
/// Trailing-slash normalization is applied around this router by
/// [`crate::server::run`], since it has to see the request before routing.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/health-check", get(health_check_handler))
        .route("/", put(shorten_handler).get(missing_alias_handler))
        .route("/{alias}", get(redirect_handler))
        .with_state(state)
        .layer(tracing::layer())
}
