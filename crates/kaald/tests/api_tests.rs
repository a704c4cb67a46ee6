//! HTTP boundary tests.
//!
//! Requests go through the full router (layers included) with faked
//! collaborators, so no socket or network is involved.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use chrono::NaiveDate;
use http_body_util::BodyExt;
use kaal_common::{Dispatcher, FakeEncyclopedia, FixedClock, FixedJokes, SiteMap};
use kaald::config::ServerConfig;
use kaald::routes::HealthResponse;
use kaald::server::{build_router, AppState};
use serde_json::{json, Value};
use std::path::PathBuf;
use std::sync::Arc;
use tower::ServiceExt;

fn test_config() -> ServerConfig {
    ServerConfig {
        static_dir: PathBuf::from("/nonexistent/kaal-static"),
        ..ServerConfig::default()
    }
}

fn test_app() -> Router {
    let encyclopedia = FakeEncyclopedia::new()
        .with_summary("ada lovelace", "Ada Lovelace was an English mathematician.");
    let now = NaiveDate::from_ymd_opt(2025, 8, 31)
        .unwrap()
        .and_hms_opt(9, 30, 0)
        .unwrap();

    let dispatcher = Dispatcher::new(SiteMap::builtin(), Arc::new(encyclopedia))
        .with_jokes(Arc::new(FixedJokes::new("Knock knock.")))
        .with_clock(Arc::new(FixedClock(now)));

    build_router(AppState::new(dispatcher), &test_config())
}

async fn post_command(app: Router, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/api/command")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_open_site_reply() {
    let (status, body) = post_command(test_app(), r#"{"text": "open youtube"}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "reply": "Opening https://www.youtube.com",
            "action": "open_url",
            "url": "https://www.youtube.com"
        })
    );
}

#[tokio::test]
async fn test_plain_reply_has_no_action() {
    let (status, body) = post_command(test_app(), r#"{"text": "flibbertigibbet"}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.get("action").is_none());
    assert!(body.get("url").is_none());
    assert!(body["reply"].as_str().unwrap().starts_with("I didn't get that."));
}

#[tokio::test]
async fn test_encyclopedia_reply() {
    let (status, body) = post_command(test_app(), r#"{"text": "Who is Ada Lovelace"}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["reply"], "Ada Lovelace was an English mathematician.");
}

#[tokio::test]
async fn test_time_reply() {
    let (_, body) = post_command(test_app(), r#"{"text": "what time is it"}"#).await;
    assert_eq!(body["reply"], "It's 09:30 AM.");
}

#[tokio::test]
async fn test_empty_text_rejected() {
    for payload in [r#"{"text": ""}"#, r#"{"text": "   \n\t"}"#, r#"{}"#] {
        let (status, body) = post_command(test_app(), payload).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", payload);
        assert_eq!(body, json!({ "reply": "Please say something for me to process." }));
    }
}

#[tokio::test]
async fn test_malformed_json_rejected() {
    let (status, body) = post_command(test_app(), "not json").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["reply"], "Please say something for me to process.");
}

#[tokio::test]
async fn test_health() {
    let request = Request::builder()
        .uri("/v1/health")
        .body(Body::empty())
        .unwrap();

    let response = test_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let health: HealthResponse = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(health.status, "healthy");
    assert_eq!(health.sites, 6);
}

#[tokio::test]
async fn test_unknown_route_without_static_dir() {
    let request = Request::builder().uri("/index.html").body(Body::empty()).unwrap();
    let response = test_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_static_dir_served_at_root() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), "<h1>KAAL</h1>").unwrap();

    let config = ServerConfig {
        static_dir: dir.path().to_path_buf(),
        ..ServerConfig::default()
    };
    let dispatcher = Dispatcher::new(SiteMap::builtin(), Arc::new(FakeEncyclopedia::new()));
    let app = build_router(AppState::new(dispatcher), &config);

    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"<h1>KAAL</h1>");
}
