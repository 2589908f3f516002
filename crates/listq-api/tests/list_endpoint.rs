//! Integration tests for list requests.
//!
//! These tests use wiremock to mock the list endpoints.

use listq_api::{ApiError, Error, ListClient, ListResponse};
use listq_filter::{build_list_search_params, ListSearchArgs, TracingNotifier};
use serde::Deserialize;
use wiremock::matchers::{header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Debug, Deserialize, PartialEq)]
struct Movie {
    id: i64,
    name: String,
}

/// Test: filter and pagination parameters end up in the query string
#[tokio::test]
async fn test_list_sends_filter_params() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/records/v1/movies"))
        .and(query_param("filter[$and][0][year][$gte]", "2000"))
        .and(query_param("filter[$and][1][genre]", "drama"))
        .and(query_param("limit", "2"))
        .and(query_param("offset", "4"))
        .and(query_param_is_missing("cursor"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "cursor": "Mw",
            "total_count": 7,
            "records": [
                {"id": 3, "name": "Amélie"},
                {"id": 4, "name": "Memento"}
            ]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let args = ListSearchArgs::new(2)
        .with_filter("year >= 2000 && genre = 'drama'")
        .with_page_index(2);
    let params = build_list_search_params(&args, &TracingNotifier);

    let client = ListClient::new(mock_server.uri()).unwrap();
    let page: ListResponse<Movie> = client
        .list("/api/records/v1/movies", params.as_pairs())
        .await
        .unwrap();

    assert_eq!(page.records.len(), 2);
    assert_eq!(
        page.records[1],
        Movie {
            id: 4,
            name: "Memento".to_string()
        }
    );
    assert_eq!(page.total_row_count, Some(7));
    assert_eq!(page.cursor.as_deref(), Some("Mw"));
}

/// Test: bearer token is attached when configured
#[tokio::test]
async fn test_list_sends_bearer_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/_admin/logs"))
        .and(header("Authorization", "Bearer admin-token"))
        .and(query_param("cursor", "42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "total_row_count": 1,
            "cursor": null,
            "entries": [{"status": 500}]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ListClient::new(mock_server.uri())
        .unwrap()
        .with_token("admin-token");
    let query = [("cursor", "42")];
    let page: ListResponse = client.list("/api/_admin/logs", &query).await.unwrap();

    assert_eq!(page.records, vec![serde_json::json!({"status": 500})]);
    assert!(!page.has_next_page());
}

/// Test: 400 responses surface the server message
#[tokio::test]
async fn test_list_bad_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/records/v1/movies"))
        .respond_with(
            ResponseTemplate::new(400).set_body_string("invalid column name for filter: nope"),
        )
        .mount(&mock_server)
        .await;

    let client = ListClient::new(mock_server.uri()).unwrap();
    let err = client
        .list::<serde_json::Value, _>("/api/records/v1/movies", &[("filter[nope]", "1")])
        .await
        .unwrap_err();

    match err {
        Error::Api(ApiError::BadRequest { message }) => {
            assert!(message.contains("invalid column name"));
        }
        other => panic!("Expected BadRequest, got {other:?}"),
    }
}

/// Test: auth, not-found and server errors map to their variants
#[tokio::test]
async fn test_list_error_statuses() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/unauthorized"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/server-error"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let client = ListClient::new(mock_server.uri()).unwrap();
    let no_query: [(&str, &str); 0] = [];

    let err = client
        .list::<serde_json::Value, _>("/unauthorized", &no_query)
        .await
        .unwrap_err();
    assert_eq!(
        err.as_api_error(),
        Some(&ApiError::Auth {
            message: "Authentication failed".to_string()
        })
    );

    let err = client
        .list::<serde_json::Value, _>("/missing", &no_query)
        .await
        .unwrap_err();
    assert_eq!(
        err.as_api_error(),
        Some(&ApiError::NotFound {
            path: "/missing".to_string()
        })
    );

    let err = client
        .list::<serde_json::Value, _>("/server-error", &no_query)
        .await
        .unwrap_err();
    assert_eq!(
        err.as_api_error(),
        Some(&ApiError::Http {
            status: 503,
            message: "Service Unavailable".to_string()
        })
    );
}

/// Test: a body that is not a list response is a decode error
#[tokio::test]
async fn test_list_invalid_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/records/v1/movies"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
        .mount(&mock_server)
        .await;

    let client = ListClient::new(mock_server.uri()).unwrap();
    let err = client
        .list::<serde_json::Value, _>("/api/records/v1/movies", &[("limit", "1")])
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Request(_)));
}
