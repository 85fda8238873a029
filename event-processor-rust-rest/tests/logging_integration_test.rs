mod common;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use common::{envelope, envelope_for, unreachable_database};
use event_processor_rust::app::{build_router, AppState};
use event_processor_rust::service::{EventProcessingService, EventRouter};
use serde_json::{json, Value};
use tower::ServiceExt;
use tracing_test::traced_test;

async fn post_in_process(body: &Value) -> (StatusCode, Value) {
    let state = AppState::new(
        EventProcessingService::new(EventRouter::with_default_handlers()),
        unreachable_database(),
    );
    let app = build_router(state, false);

    let request = Request::builder()
        .method("POST")
        .uri("/events")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

#[tokio::test]
#[traced_test]
async fn test_success_logs_receipt_summary_and_duration() {
    let (status, _) = post_in_process(&envelope_for(&json!({
        "event": "user.created",
        "data": {"userId": "u-log-1"}
    })))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(logs_contain("Received Pub/Sub message: m1 published at 2024-01-01T00:00:00Z"));
    assert!(logs_contain("Processing event"));
    assert!(logs_contain("u-log-1"));
    assert!(logs_contain("Successfully processed message m1 in"));
}

#[tokio::test]
#[traced_test]
async fn test_log_lines_carry_message_id_span() {
    let (status, _) = post_in_process(&envelope_for(&json!({"event": "test"}))).await;

    assert_eq!(status, StatusCode::OK);
    assert!(logs_contain("push_message{message_id=m1}"));
}

#[tokio::test]
#[traced_test]
async fn test_unknown_type_logs_warning() {
    let (status, body) = post_in_process(&envelope_for(&json!({"event": "nobody.cares"}))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"]["status"], "acknowledged");
    assert!(logs_contain("Unknown event type"));
}

#[tokio::test]
#[traced_test]
async fn test_decode_failure_logs_error_with_elapsed_time() {
    let (status, _) = post_in_process(&envelope("%%%")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(logs_contain("Failed to decode message"));
    assert!(logs_contain("Failed to process message m1 after"));
}
