mod common;

use axum::http::StatusCode;
use nurl::utils::alias_generator::{ALIAS_LENGTH, is_valid_alias};

#[tokio::test]
async fn test_shorten_success() {
    let server = common::create_test_server();

    let response = server
        .put("/")
        .add_query_param("url", "http://example.com/page")
        .await;

    response.assert_status_ok();

    let body = response.text();
    assert!(body.starts_with("Shortened \"http://example.com/page\" to \"http://localhost:8080/"));

    let alias = common::alias_from_body(&body);
    assert_eq!(alias.len(), ALIAS_LENGTH);
    assert!(is_valid_alias(&alias));
}

#[tokio::test]
async fn test_shorten_same_url_reuses_alias() {
    let server = common::create_test_server();

    let first = server
        .put("/")
        .add_query_param("url", "https://example.com/docs")
        .await;
    let second = server
        .put("/")
        .add_query_param("url", "https://example.com/docs")
        .await;

    first.assert_status_ok();
    second.assert_status_ok();
    assert_eq!(
        common::alias_from_body(&first.text()),
        common::alias_from_body(&second.text())
    );
}

#[tokio::test]
async fn test_shorten_equivalent_spelling_reuses_alias() {
    let server = common::create_test_server();

    let first = server
        .put("/")
        .add_query_param("url", "https://example.com/docs")
        .await;
    let second = server
        .put("/")
        .add_query_param("url", "HTTPS://EXAMPLE.COM:443/docs")
        .await;

    // The body echoes the URL as submitted
    assert!(second.text().contains("\"HTTPS://EXAMPLE.COM:443/docs\""));
    assert_eq!(
        common::alias_from_body(&first.text()),
        common::alias_from_body(&second.text())
    );
}

#[tokio::test]
async fn test_shorten_different_urls_get_different_aliases() {
    let server = common::create_test_server();

    let first = server
        .put("/")
        .add_query_param("url", "https://example.com/a")
        .await;
    let second = server
        .put("/")
        .add_query_param("url", "https://example.com/b")
        .await;

    assert_ne!(
        common::alias_from_body(&first.text()),
        common::alias_from_body(&second.text())
    );
}

#[tokio::test]
async fn test_shorten_missing_url() {
    let server = common::create_test_server();

    let response = server.put("/").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_shorten_empty_url() {
    let server = common::create_test_server();

    let response = server.put("/").add_query_param("url", "").await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_shorten_invalid_url() {
    let server = common::create_test_server();

    for url in ["not a url", "example.com", "ftp://example.com/file"] {
        let response = server.put("/").add_query_param("url", url).await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }
}

#[tokio::test]
async fn test_shorten_wrong_method() {
    let server = common::create_test_server();

    let response = server
        .post("/")
        .add_query_param("url", "http://example.com/page")
        .await;

    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
}
