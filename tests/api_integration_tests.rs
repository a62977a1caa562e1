//! Integration Tests for API Endpoints
//!
//! Drives the full router against a mocked guess API.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use nbnhhsh::{api::create_router, AppState, Config, NbnhhshClient};
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// == Helper Functions ==

fn create_app(server: &MockServer, cache_ttl: i64, cache_max_size: usize) -> Router {
    let config = Config {
        api_url: format!("{}/api/nbnhhsh/", server.uri()),
        cache_ttl,
        cache_max_size,
        ..Config::default()
    };
    let client = NbnhhshClient::new(&config.api_url, Duration::from_secs(2));
    create_router(AppState::from_config(&config, Arc::new(client)))
}

async fn mock_guess(server: &MockServer, keyword: &str, body: Value, times: u64) {
    Mock::given(method("POST"))
        .and(path("/api/nbnhhsh/guess"))
        .and(body_json(json!({ "text": keyword })))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(times)
        .mount(server)
        .await;
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn post_empty(uri: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

// == Lookup Endpoint Tests ==

#[tokio::test]
async fn test_lookup_is_cached_case_insensitively() {
    let server = MockServer::start().await;
    mock_guess(
        &server,
        "hhh",
        json!([{ "name": "hhh", "trans": ["哈哈哈", "很好很好"] }]),
        1,
    )
    .await;
    let app = create_app(&server, 3600, 2);

    let (status, first) = send(&app, get("/lookup/hhh")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["keyword"], "hhh");
    assert_eq!(first["translations"], json!(["哈哈哈", "很好很好"]));
    assert_eq!(first["reply"], "hhh 可能是: 哈哈哈，或者 很好很好");

    let (status, second) = send(&app, get("/lookup/HHH")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(second, first);

    let (_, stats) = send(&app, get("/stats")).await;
    assert_eq!(stats["hits"], 1);
    assert_eq!(stats["misses"], 1);
    assert_eq!(stats["total_entries"], 1);
    // `expect(1)` is verified when the mock server drops
}

#[tokio::test]
async fn test_lookup_empty_translations_is_not_found() {
    let server = MockServer::start().await;
    mock_guess(&server, "xyz", json!([{ "name": "xyz", "trans": [] }]), 1).await;
    let app = create_app(&server, 3600, 16);

    let (status, body) = send(&app, get("/lookup/xyz")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "没能找到 xyz 的含义");

    // The empty result is cached all the same
    let (status, _) = send(&app, get("/lookup/xyz")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_failed_lookup_is_not_cached() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    mock_guess(&server, "nb", json!([{ "name": "nb", "trans": ["牛逼"] }]), 1).await;
    let app = create_app(&server, 3600, 16);

    let (status, _) = send(&app, get("/lookup/nb")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&app, get("/lookup/nb")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["reply"], "nb 可能是: 牛逼");
}

#[tokio::test]
async fn test_empty_guess_object_is_not_cached() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{}])))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    mock_guess(&server, "hhh", json!([{ "name": "hhh", "trans": ["哈哈哈"] }]), 1).await;
    let app = create_app(&server, 3600, 16);

    let (status, _) = send(&app, get("/lookup/hhh")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&app, get("/lookup/hhh")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["reply"], "hhh 可能是: 哈哈哈");
}

// == Query Endpoint Tests ==

#[tokio::test]
async fn test_query_endpoint() {
    let server = MockServer::start().await;
    mock_guess(
        &server,
        "YYDS",
        json!([{ "name": "yyds", "trans": ["永远的神"] }]),
        1,
    )
    .await;
    let app = create_app(&server, 3600, 16);

    let (status, body) = send(&app, post_json("/query", json!({ "message": "YYDS是什么？" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["keyword"], "YYDS");
    assert_eq!(body["found"], true);
    assert_eq!(body["reply"], "yyds 可能是: 永远的神");
}

#[tokio::test]
async fn test_query_endpoint_unknown_keyword() {
    let server = MockServer::start().await;
    mock_guess(&server, "qwerty", json!([]), 1).await;
    let app = create_app(&server, 3600, 16);

    let (status, body) = send(&app, post_json("/query", json!({ "message": "qwerty是啥" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["found"], false);
    assert_eq!(body["reply"], "没能找到 qwerty 的含义");
}

#[tokio::test]
async fn test_query_endpoint_rejects_non_questions() {
    let server = MockServer::start().await;
    let app = create_app(&server, 3600, 16);

    let (status, body) = send(&app, post_json("/query", json!({ "message": "hello" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("Invalid request"));
}

// == Cache Maintenance Tests ==

#[tokio::test]
async fn test_clear_cache_forces_refetch() {
    let server = MockServer::start().await;
    mock_guess(&server, "hhh", json!([{ "name": "hhh", "trans": ["哈哈哈"] }]), 2).await;
    let app = create_app(&server, 3600, 16);

    send(&app, get("/lookup/hhh")).await;

    let (status, body) = send(&app, post_empty("/cache/clear")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "nbnhhsh 缓存已清理");

    let (status, _) = send(&app, get("/lookup/hhh")).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_cleanup_endpoint() {
    let server = MockServer::start().await;
    let app = create_app(&server, 3600, 16);

    let (status, body) = send(&app, post_empty("/cache/cleanup")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Removed 0 expired entries");
}

#[tokio::test]
async fn test_size_limit_through_api() {
    let server = MockServer::start().await;
    for keyword in ["aa", "bb", "cc"] {
        mock_guess(
            &server,
            keyword,
            json!([{ "name": keyword, "trans": ["x"] }]),
            1,
        )
        .await;
    }
    let app = create_app(&server, 3600, 2);

    for keyword in ["aa", "bb", "cc"] {
        let (status, _) = send(&app, get(&format!("/lookup/{}", keyword))).await;
        assert_eq!(status, StatusCode::OK);
    }

    let (_, stats) = send(&app, get("/stats")).await;
    assert_eq!(stats["total_entries"], 2);
    assert_eq!(stats["evictions"], 1);
}

// == Health Endpoint Tests ==

#[tokio::test]
async fn test_health_endpoint() {
    let server = MockServer::start().await;
    let app = create_app(&server, 3600, 16);

    let (status, body) = send(&app, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}
