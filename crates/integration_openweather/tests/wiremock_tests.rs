//! Integration tests for the forecast client using wiremock
//!
//! These tests verify the client's behavior against a mock HTTP server,
//! ensuring proper handling of various response scenarios.

use integration_openweather::{ForecastClient, ForecastConfig, ForecastError, OpenWeatherClient};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

/// Create a test client configured to use the mock server
///
/// # Panics
///
/// Panics if the client cannot be created (should not happen in tests).
fn create_test_client(mock_server: &MockServer) -> OpenWeatherClient {
    let config = ForecastConfig {
        base_url: mock_server.uri(),
        timeout_secs: 5,
    };
    #[allow(clippy::expect_used)]
    OpenWeatherClient::new(config).expect("Failed to create client")
}

// ============================================================================
// Success scenarios
// ============================================================================

#[tokio::test]
async fn test_fetch_by_city_passes_body_through_verbatim() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .and(query_param("q", "London"))
        .and(query_param("appid", "abc123"))
        .and(query_param("units", "metric"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"list":[]}"#))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.fetch_by_city("London", "abc123").await;

    assert!(result.is_ok(), "Expected success, got: {result:?}");
    assert_eq!(result.unwrap(), r#"{"list":[]}"#);
}

#[tokio::test]
async fn test_fetch_by_city_does_not_validate_body() {
    let mock_server = MockServer::start().await;

    // Passthrough applies even when the upstream body is not valid JSON.
    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.fetch_by_city("London", "abc123").await;

    assert_eq!(result.unwrap(), "not json at all");
}

#[tokio::test]
async fn test_fetch_by_city_encodes_city_in_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .and(query_param("q", "New York"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.fetch_by_city("New York", "abc123").await;

    assert!(result.is_ok(), "Expected success, got: {result:?}");
}

// ============================================================================
// Error handling scenarios
// ============================================================================

#[tokio::test]
async fn test_not_found_returns_request_failed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(ResponseTemplate::new(404).set_body_string(r#"{"cod":"404"}"#))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.fetch_by_city("Nowhere", "abc123").await;

    match result {
        Err(ForecastError::RequestFailed(detail)) => {
            assert!(detail.contains("404"), "detail was: {detail}");
        },
        other => unreachable!("Expected RequestFailed, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_unauthorized_returns_request_failed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(ResponseTemplate::new(401).set_body_string(r#"{"cod":401}"#))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.fetch_by_city("London", "bad-key").await;

    assert!(matches!(result, Err(ForecastError::RequestFailed(_))));
}

#[tokio::test]
async fn test_server_error_returns_service_unavailable() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.fetch_by_city("London", "abc123").await;

    assert!(
        matches!(result, Err(ForecastError::ServiceUnavailable(_))),
        "Expected ServiceUnavailable, got: {result:?}"
    );
}

#[tokio::test]
async fn test_connection_failure_returns_request_failed() {
    // Start and immediately drop a server so the port refuses connections.
    let uri = {
        let mock_server = MockServer::start().await;
        mock_server.uri()
    };

    let config = ForecastConfig {
        base_url: uri,
        timeout_secs: 2,
    };
    #[allow(clippy::expect_used)]
    let client = OpenWeatherClient::new(config).expect("Failed to create client");

    let result = client.fetch_by_city("London", "abc123").await;
    assert!(
        matches!(result, Err(ForecastError::RequestFailed(_))),
        "Expected RequestFailed, got: {result:?}"
    );
}

#[tokio::test]
async fn test_error_detail_does_not_contain_api_key() {
    let uri = {
        let mock_server = MockServer::start().await;
        mock_server.uri()
    };

    let config = ForecastConfig {
        base_url: uri,
        timeout_secs: 2,
    };
    #[allow(clippy::expect_used)]
    let client = OpenWeatherClient::new(config).expect("Failed to create client");

    let result = client.fetch_by_city("London", "super-secret-key").await;
    let err = result.unwrap_err();
    assert!(
        !err.to_string().contains("super-secret-key"),
        "error leaked the API key: {err}"
    );
}
