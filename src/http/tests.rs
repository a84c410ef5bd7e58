//! Tests for the HTTP client module

use super::*;
use crate::error::Error;
use std::time::Duration;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn query(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

#[test]
fn test_http_client_config_default() {
    let config = HttpClientConfig::default();
    assert_eq!(config.timeout, Duration::from_secs(20));
    assert!(config.default_headers.is_empty());
    assert!(config.user_agent.starts_with("datos-extract/"));
}

#[test]
fn test_http_client_config_builder() {
    let config = HttpClientConfig::builder()
        .timeout(Duration::from_secs(5))
        .header("X-App-Token", "token")
        .user_agent("test-agent/1.0")
        .build();

    assert_eq!(config.timeout, Duration::from_secs(5));
    assert_eq!(
        config.default_headers.get("X-App-Token"),
        Some(&"token".to_string())
    );
    assert_eq!(config.user_agent, "test-agent/1.0");
}

#[tokio::test]
async fn test_get_page_sends_query_pairs() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/resource/95qx-tzs7.json"))
        .and(query_param("$limit", "10"))
        .and(query_param("$offset", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"[{"id": 1}]"#))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = HttpClient::new().unwrap();
    let url = format!("{}/resource/95qx-tzs7.json", mock_server.uri());
    let response = client
        .get_page(&url, &query(&[("$limit", "10"), ("$offset", "20")]))
        .await
        .unwrap();

    assert_eq!(response.status, 200);
    assert_eq!(response.body, r#"[{"id": 1}]"#);
}

#[tokio::test]
async fn test_get_page_default_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data.json"))
        .and(header("X-App-Token", "secret"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .header("X-App-Token", "secret")
        .build();
    let client = HttpClient::with_config(config).unwrap();
    let response = client
        .get_page(&format!("{}/data.json", mock_server.uri()), &[])
        .await
        .unwrap();

    assert_eq!(response.body, "[]");
}

#[tokio::test]
async fn test_get_page_passes_error_status_through() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data.json"))
        .respond_with(ResponseTemplate::new(503).set_body_string(r#"{"error": true}"#))
        .mount(&mock_server)
        .await;

    let client = HttpClient::new().unwrap();
    let response = client
        .get_page(&format!("{}/data.json", mock_server.uri()), &[])
        .await
        .unwrap();

    assert_eq!(response.status, 503);
    assert_eq!(response.body, r#"{"error": true}"#);
}

#[tokio::test]
async fn test_get_page_is_attempted_once() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/flaky.json"))
        .respond_with(ResponseTemplate::new(500).set_body_string("[]"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = HttpClient::new().unwrap();
    let response = client
        .get_page(&format!("{}/flaky.json", mock_server.uri()), &[])
        .await
        .unwrap();

    assert_eq!(response.status, 500);
}

#[tokio::test]
async fn test_get_page_connection_refused() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = HttpClient::new().unwrap();
    let err = client
        .get_page(&format!("http://{addr}/data.json"), &[])
        .await
        .unwrap_err();

    assert!(err.is_transport());
}

#[tokio::test]
async fn test_get_page_read_timeout_is_unclassified() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/slow.json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("[]")
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .timeout(Duration::from_millis(100))
        .build();
    let client = HttpClient::with_config(config).unwrap();
    let err = client
        .get_page(&format!("{}/slow.json", mock_server.uri()), &[])
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Timeout { timeout_ms: 100 }));
    assert!(!err.is_transport());
}

#[tokio::test]
async fn test_get_page_connect_timeout_is_transport() {
    // non-routable address: the TCP handshake never completes
    let config = HttpClientConfig::builder()
        .timeout(Duration::from_millis(200))
        .build();
    let client = HttpClient::with_config(config).unwrap();
    let err = client
        .get_page("http://10.255.255.1:81/resource/95qx-tzs7.json", &[])
        .await
        .unwrap_err();

    assert!(err.is_transport(), "expected transport error, got {err:?}");
}
