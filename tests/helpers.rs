// Shared test helpers for settings, collectors, and mock HTTP servers.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::sync::Arc;

use hostinfo::{Collector, Settings, Target};
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

pub const TEST_USER_AGENT: &str = "hostinfo_test/1.0";

/// Settings with short timeouts so failing probes finish quickly.
#[allow(dead_code)] // Used by other test files
pub fn test_settings() -> Settings {
    Settings {
        default_protocol: "http".to_string(),
        default_user_agent: TEST_USER_AGENT.to_string(),
        ping_timeout_secs: 2,
        http_timeout_secs: 5,
        tls_timeout_secs: 2,
        dns_timeout_secs: 1,
        ..Default::default()
    }
}

#[allow(dead_code)]
pub fn test_collector(settings: Settings) -> Collector {
    Collector::new(Arc::new(settings)).expect("Failed to create collector")
}

/// Parses `input` and applies `settings` fallbacks.
#[allow(dead_code)]
pub fn target_for(input: &str, settings: &Settings) -> Target {
    hostinfo::ParsedTarget::parse(input)
        .expect("Failed to parse test target")
        .resolve(settings)
}

/// Starts a server where `/` and every `/hop/N` answer 302 to `/hop/N+1`,
/// up to `hops` redirects; `/hop/{hops}` answers 200.
#[allow(dead_code)]
pub async fn redirect_chain_server(hops: usize) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(move |req: &Request| {
            let current = req
                .url
                .path()
                .strip_prefix("/hop/")
                .and_then(|n| n.parse::<usize>().ok())
                .unwrap_or(0);
            if current >= hops {
                ResponseTemplate::new(200)
            } else {
                ResponseTemplate::new(302)
                    .insert_header("Location", format!("/hop/{}", current + 1).as_str())
            }
        })
        .mount(&server)
        .await;
    server
}

/// Reserves a local port and releases it, leaving nothing listening there.
#[allow(dead_code)]
pub async fn closed_local_port() -> u16 {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let port = listener
        .local_addr()
        .expect("Failed to read listener address")
        .port();
    drop(listener);
    port
}
