#![allow(dead_code)]

use axum::Router;
use axum_test::TestServer;
use nurl::application::services::UrlService;
use nurl::domain::repositories::UrlRepository;
use nurl::infrastructure::persistence::InMemoryUrlRepository;
use nurl::routes::app_router;
use nurl::state::AppState;
use std::sync::Arc;

pub const BASE_URL: &str = "http://localhost:8080/";

pub fn create_test_state_with(repository: Arc<dyn UrlRepository>) -> AppState {
    let url_service = UrlService::new(repository, BASE_URL);
    AppState::new(Arc::new(url_service))
}

pub fn create_test_state() -> AppState {
    create_test_state_with(Arc::new(InMemoryUrlRepository::new()))
}

pub fn create_test_app() -> Router {
    app_router(create_test_state())
}

pub fn create_test_server() -> TestServer {
    TestServer::new(create_test_app()).unwrap()
}

/// Pulls the alias out of a `Shortened "<long>" to "<base><alias>"` body.
pub fn alias_from_body(body: &str) -> String {
    let short_url = body
        .trim_end()
        .rsplit(" to ")
        .next()
        .unwrap()
        .trim_matches('"');

    short_url.strip_prefix(BASE_URL).unwrap().to_string()
}
