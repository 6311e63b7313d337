//! Integration tests for the HTTP fetch probe
//!
//! These tests verify:
//! - Redirect chains are followed by hand and bounded by the limit
//! - Basic auth and User-Agent are sent
//! - Error statuses are ordinary results

mod helpers;

use hostinfo::fetch::fetch;
use hostinfo::initialization::init_probe_client;
use hostinfo::ProbeError;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use helpers::{closed_local_port, redirect_chain_server, target_for, test_settings, TEST_USER_AGENT};

#[tokio::test]
async fn test_redirect_chain_stops_at_limit() {
    // 11 redirects in a row, limit 10
    let server = redirect_chain_server(11).await;
    let settings = test_settings();
    let client = init_probe_client(&settings).expect("Failed to build client");
    let target = target_for(&server.uri(), &settings);

    let outcome = fetch(&client, &target, &target.fetch_url(), 10)
        .await
        .expect("fetch should succeed");

    assert_eq!(outcome.redirect_count(), 10);
    assert_eq!(outcome.redirect_urls.len(), 10);
    // The 11th redirect was fetched but not followed
    assert_eq!(outcome.status, 302);
    assert_eq!(
        outcome.redirect_urls.last().map(String::as_str),
        Some(format!("{}/hop/10", server.uri()).as_str())
    );
}

#[tokio::test]
async fn test_redirect_chain_within_limit_reaches_final_page() {
    let server = redirect_chain_server(3).await;
    let settings = test_settings();
    let client = init_probe_client(&settings).expect("Failed to build client");
    let target = target_for(&server.uri(), &settings);

    let outcome = fetch(&client, &target, &target.fetch_url(), 10)
        .await
        .expect("fetch should succeed");

    assert_eq!(outcome.status, 200);
    assert_eq!(
        outcome.redirect_urls,
        vec![
            format!("{}/hop/1", server.uri()),
            format!("{}/hop/2", server.uri()),
            format!("{}/hop/3", server.uri()),
        ]
    );
}

#[tokio::test]
async fn test_zero_redirect_limit_returns_first_response() {
    let server = redirect_chain_server(2).await;
    let settings = test_settings();
    let client = init_probe_client(&settings).expect("Failed to build client");
    let target = target_for(&server.uri(), &settings);

    let outcome = fetch(&client, &target, &target.fetch_url(), 0)
        .await
        .expect("fetch should succeed");

    assert_eq!(outcome.status, 302);
    assert!(outcome.redirect_urls.is_empty());
}

#[tokio::test]
async fn test_redirect_without_location_is_final() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(301))
        .mount(&server)
        .await;
    let settings = test_settings();
    let client = init_probe_client(&settings).expect("Failed to build client");
    let target = target_for(&server.uri(), &settings);

    let outcome = fetch(&client, &target, &target.fetch_url(), 10)
        .await
        .expect("fetch should succeed");

    assert_eq!(outcome.status, 301);
    assert_eq!(outcome.redirect_count(), 0);
}

#[tokio::test]
async fn test_error_status_is_a_result() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;
    let settings = test_settings();
    let client = init_probe_client(&settings).expect("Failed to build client");
    let target = target_for(&server.uri(), &settings);

    let outcome = fetch(&client, &target, &target.fetch_url(), 10)
        .await
        .expect("a 503 is still a fetch result");

    assert_eq!(outcome.status, 503);
}

#[tokio::test]
async fn test_sends_basic_auth_and_user_agent() {
    let server = MockServer::start().await;
    // "user:pass" in base64
    Mock::given(method("GET"))
        .and(path("/"))
        .and(header("authorization", "Basic dXNlcjpwYXNz"))
        .and(header("user-agent", TEST_USER_AGENT))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    let settings = test_settings();
    let client = init_probe_client(&settings).expect("Failed to build client");
    let address = server.address();
    let target = target_for(
        &format!("http://user:pass@{}:{}", address.ip(), address.port()),
        &settings,
    );

    let outcome = fetch(&client, &target, &target.fetch_url(), 10)
        .await
        .expect("fetch should succeed");

    // Unmatched requests get wiremock's default 404
    assert_eq!(outcome.status, 200);
}

#[tokio::test]
async fn test_username_alone_sends_no_auth() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(header("authorization", "Basic dXNlcjpwYXNz"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;
    let settings = test_settings();
    let client = init_probe_client(&settings).expect("Failed to build client");
    let address = server.address();
    let target = target_for(
        &format!("http://user@{}:{}", address.ip(), address.port()),
        &settings,
    );

    let outcome = fetch(&client, &target, &target.fetch_url(), 10)
        .await
        .expect("fetch should succeed");

    assert_eq!(outcome.status, 404);
}

#[tokio::test]
async fn test_connection_refused_is_http_error() {
    let port = closed_local_port().await;
    let settings = test_settings();
    let client = init_probe_client(&settings).expect("Failed to build client");
    let target = target_for(&format!("http://127.0.0.1:{port}"), &settings);

    let err = fetch(&client, &target, &target.fetch_url(), 10)
        .await
        .expect_err("nothing listens on the port");

    assert!(matches!(err, ProbeError::Http { .. }), "got {err:?}");
}
