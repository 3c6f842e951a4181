//! HTTP route tests driven through the router without a socket

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use std::time::{Duration, Instant};
use textlens_core::{Analyzer, AnalyzerConfig, SentimentModel};
use textlens_server::server::{build_router, AppState};
use tower::ServiceExt;

fn app() -> Router {
    build_router(AppState::new(Analyzer::new(), "Text Analysis API"))
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn analyze_request(body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/analyze_text")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_health() {
    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let (status, body) = send(app(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "status": "ok",
            "service": "Text Analysis API",
            "version": env!("CARGO_PKG_VERSION"),
        })
    );
}

#[tokio::test]
async fn test_analyze_text() {
    let (status, body) = send(
        app(),
        analyze_request(r#"{"text": "Cats are great. Dogs are too."}"#),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let fields: Vec<&str> = body.as_object().unwrap().keys().map(String::as_str).collect();
    for field in [
        "language",
        "sentiment",
        "polarity_score",
        "word_count",
        "character_count",
        "keywords",
        "summary",
    ] {
        assert!(fields.contains(&field), "missing {field}");
    }
    assert_eq!(body["word_count"], 6);
    assert_eq!(body["character_count"], 29);
    assert_eq!(body["summary"], "Cats are great. Dogs are too.");
}

#[tokio::test]
async fn test_blank_text_returns_error_payload() {
    let (status, body) = send(app(), analyze_request(r#"{"text": "   "}"#)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"error": "Text cannot be empty"}));
}

#[tokio::test]
async fn test_missing_text_field_is_rejected() {
    let (status, _) = send(app(), analyze_request("{}")).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_malformed_json_is_rejected() {
    let (status, _) = send(app(), analyze_request("{not json")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_languages() {
    let request = Request::builder()
        .uri("/languages")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(app(), request).await;

    assert_eq!(status, StatusCode::OK);
    let codes: Vec<&str> = body["languages"]
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["code"].as_str().unwrap())
        .collect();
    assert_eq!(codes, vec!["de", "en", "es", "fr", "it"]);
    assert_eq!(body["languages"][1]["name"], "English");
}

#[tokio::test]
async fn test_configured_keyword_count() {
    let analyzer = Analyzer::builder()
        .config(AnalyzerConfig::builder().keyword_count(2).build().unwrap())
        .build();
    let app = build_router(AppState::new(analyzer, "Lens"));

    let (_, body) = send(
        app,
        analyze_request(r#"{"text": "apple banana cherry apple banana apple"}"#),
    )
    .await;
    assert_eq!(body["keywords"], json!(["apple", "banana"]));
}

#[tokio::test]
async fn test_cors_preflight() {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/analyze_text")
        .header(header::ORIGIN, "http://example.com")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();
    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}

/// Sentiment model that holds its thread for a while
struct SlowModel(Duration);

impl SentimentModel for SlowModel {
    fn polarity(&self, _text: &str) -> f64 {
        std::thread::sleep(self.0);
        0.0
    }
}

struct BrokenModel;

impl SentimentModel for BrokenModel {
    fn polarity(&self, _text: &str) -> f64 {
        panic!("sentiment model failed");
    }
}

#[tokio::test]
async fn test_health_answers_during_slow_analysis() {
    let analyzer = Analyzer::builder()
        .sentiment(SlowModel(Duration::from_secs(2)))
        .build();
    let app = build_router(AppState::new(analyzer, "Lens"));

    let slow = tokio::spawn(send(
        app.clone(),
        analyze_request(r#"{"text": "Cats are great."}"#),
    ));
    tokio::task::yield_now().await;

    let started = Instant::now();
    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let (status, body) = send(app, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert!(started.elapsed() < Duration::from_secs(1));

    let (status, body) = slow.await.unwrap();
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["word_count"], 3);
}

#[tokio::test]
async fn test_failed_analysis_is_internal_error() {
    let analyzer = Analyzer::builder().sentiment(BrokenModel).build();
    let app = build_router(AppState::new(analyzer, "Lens"));

    let (status, _) = send(app, analyze_request(r#"{"text": "Cats are great."}"#)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}
