//! Configuration and client tests.
//!
//! Tests actual behavior, not constants.

use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use arxiv_mcp::client::{ArxivClient, SearchQuery};
use arxiv_mcp::config::Config;
use arxiv_mcp::error::ClientError;
use arxiv_mcp::models::{SortBy, SortOrder};

const SEARCH_FIXTURE: &str = include_str!("fixtures/search_response.xml");

// =============================================================================
// Config Behavior Tests
// =============================================================================

#[test]
fn test_config_override_endpoint() {
    let config = Config::new(Some("https://arxiv-mirror.example.org/api/query".to_string()));
    assert_eq!(config.api_url, "https://arxiv-mirror.example.org/api/query");
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_for_testing_appends_query_path() {
    let config = Config::for_testing("http://127.0.0.1:4000/");
    assert_eq!(config.api_url, "http://127.0.0.1:4000/api/query");
    assert_eq!(config.max_retries, 0);
}

#[test]
fn test_config_rejects_bad_endpoints() {
    assert!(Config::new(Some("not a url".to_string())).validate().is_err());
    assert!(Config::new(Some("ftp://export.arxiv.org/api/query".to_string())).validate().is_err());
}

// =============================================================================
// Client Behavior Tests
// =============================================================================

#[test]
fn test_client_creation_succeeds() {
    let client = ArxivClient::new(Config::default());
    assert!(client.is_ok());
}

#[test]
fn test_client_creation_fails_on_invalid_endpoint() {
    let client = ArxivClient::new(Config::new(Some("::::".to_string())));
    assert!(client.is_err());
}

#[test]
fn test_client_debug_shows_endpoint() {
    let client = ArxivClient::new(Config::for_testing("http://localhost:9")).unwrap();
    let debug = format!("{client:?}");
    assert!(debug.contains("ArxivClient"));
    assert!(debug.contains("http://localhost:9/api/query"));
}

#[tokio::test]
async fn test_client_sends_identifying_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/query"))
        .and(header("accept", "application/atom+xml"))
        .and(header("user-agent", concat!("arxiv-mcp/", env!("CARGO_PKG_VERSION"))))
        .respond_with(ResponseTemplate::new(200).set_body_raw(SEARCH_FIXTURE, "application/atom+xml"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ArxivClient::new(Config::for_testing(&mock_server.uri())).unwrap();
    let feed = client.search(&SearchQuery::new("all:llama")).await.unwrap();

    assert_eq!(feed.total_results, 142);
    assert_eq!(feed.papers.len(), 2);
}

#[tokio::test]
async fn test_client_search_parameters() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/query"))
        .and(query_param("search_query", "cat:hep-th"))
        .and(query_param("start", "40"))
        .and(query_param("max_results", "20"))
        .and(query_param("sortBy", "lastUpdatedDate"))
        .and(query_param("sortOrder", "ascending"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(SEARCH_FIXTURE, "application/atom+xml"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ArxivClient::new(Config::for_testing(&mock_server.uri())).unwrap();
    let query = SearchQuery::category("hep-th")
        .page(40, 20)
        .sorted(SortBy::LastUpdatedDate, SortOrder::Ascending);

    assert!(client.search(&query).await.is_ok());
}

#[tokio::test]
async fn test_fetch_by_ids_empty_skips_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(SEARCH_FIXTURE, "application/atom+xml"))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = ArxivClient::new(Config::for_testing(&mock_server.uri())).unwrap();
    let feed = client.fetch_by_ids(&[]).await.unwrap();

    assert!(feed.is_empty());
    assert_eq!(feed.total_results, 0);
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    // Port 9 (discard) is not listening in test environments.
    let client = ArxivClient::new(Config::for_testing("http://127.0.0.1:9")).unwrap();
    let err = client.search(&SearchQuery::new("all:test")).await.unwrap_err();

    assert!(matches!(err, ClientError::Middleware(_) | ClientError::Http(_)), "{err:?}");
}
