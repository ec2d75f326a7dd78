//! Endpoint tests driving the composed router in-process.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use matstats_gateway::{app_state::AppState, config, router};

fn test_app() -> axum::Router {
    let cfg = config::load_from_str("version: 1\n").unwrap();
    router::build_router(AppState::new(cfg))
}

fn stats_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/stats")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_owned()))
        .unwrap()
}

async fn body_json(res: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(res.into_body(), 1024 * 1024).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn stats_ok_with_diagonal_q() {
    let res = test_app()
        .oneshot(stats_request(r#"{"Q": [[1, 0], [0, 1]], "R": [[2, 3], [4, 5]]}"#))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body = body_json(res).await;
    assert_eq!(
        body,
        json!({ "max": 5.0, "min": 0.0, "sum": 16.0, "average": 2.0, "isDiagonal": true })
    );
}

#[tokio::test]
async fn stats_shape_error_has_fixed_body() {
    let res = test_app()
        .oneshot(stats_request(r#"{"Q": "not an array", "R": [[1]]}"#))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(res).await, json!({ "error": "Q y R deben ser matrices" }));
}

#[tokio::test]
async fn stats_missing_r_has_fixed_body() {
    let res = test_app()
        .oneshot(stats_request(r#"{"Q": [[1]]}"#))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(res).await, json!({ "error": "Q y R deben ser matrices" }));
}

#[tokio::test]
async fn stats_empty_rows_yield_degenerate_summary() {
    let res = test_app()
        .oneshot(stats_request(r#"{"Q": [[]], "R": [[]]}"#))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body = body_json(res).await;
    assert_eq!(body["max"], Value::Null);
    assert_eq!(body["min"], Value::Null);
    assert_eq!(body["sum"], json!(0.0));
    assert_eq!(body["average"], Value::Null);
    assert_eq!(body["isDiagonal"], json!(true));
}

#[tokio::test]
async fn malformed_json_body_is_bad_request() {
    let res = test_app().oneshot(stats_request("not json")).await.unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = body_json(res).await;
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn oversized_body_is_rejected_with_413() {
    let cfg = config::load_from_str(
        r#"
version: 1
gateway:
  max_body_bytes: 1024
"#,
    )
    .unwrap();
    let app = router::build_router(AppState::new(cfg));

    let big_row: Vec<u32> = (0..2048).collect();
    let body = serde_json::to_string(&json!({ "Q": [big_row], "R": [[1]] })).unwrap();
    let res = app.oneshot(stats_request(&body)).await.unwrap();

    assert_eq!(res.status(), StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(body_json(res).await, json!({ "error": "payload too large" }));
}

#[tokio::test]
async fn healthz_is_ok() {
    let res = test_app()
        .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn metrics_render_known_counters() {
    let res = test_app()
        .oneshot(Request::builder().uri("/metrics").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(res.into_body(), 1024 * 1024).await.unwrap();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(text.contains("matstats_http_requests_total"));
    assert!(text.contains("matstats_draining 0"));
}
