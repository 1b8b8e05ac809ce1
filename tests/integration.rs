//! Integration tests for the timesheet report engine.
//!
//! This test suite covers:
//! - The report endpoints driven through the router
//! - The HTTP time entry source against a local server
//! - End-to-end report generation from a live source

use std::net::SocketAddr;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
    routing::get,
};
use serde_json::{Value, json};
use tower::ServiceExt;

use timesheet_report::api::{AppState, create_router};
use timesheet_report::config::{ConfigLoader, SourceConfig};
use timesheet_report::error::ReportError;
use timesheet_report::pipeline::generate_report;
use timesheet_report::source::{HttpTimeEntrySource, TimeEntrySource};

// =============================================================================
// Test Helpers
// =============================================================================

fn create_router_for_test() -> Router {
    let config = ConfigLoader::load("./config/report.yaml").expect("Failed to load config");
    create_router(AppState::new(config))
}

fn entry(name: &str, start: &str, end: &str) -> Value {
    json!({
        "EmployeeName": name,
        "StarTimeUtc": start,
        "EndTimeUtc": end,
        "EntryNotes": "ignored"
    })
}

fn sample_entries() -> Value {
    json!([
        entry("Alice", "2026-01-15T09:00:00", "2026-01-15T17:00:00"),
        entry("Bob", "2026-01-15T09:00:00", "2026-01-15T09:00:00"),
        entry("Alice", "2026-01-15T08:00:00", "2026-01-15T08:30:00"),
    ])
}

async fn post(router: Router, uri: &str, body: &Value) -> (StatusCode, String, Vec<u8>) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec();

    (status, content_type, bytes)
}

/// Serves `router` on an ephemeral local port.
async fn spawn_server(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

async fn spawn_source_server() -> SocketAddr {
    let router = Router::new()
        .route("/entries", get(|| async { sample_entries().to_string() }))
        .route("/empty", get(|| async { "[]" }))
        .route(
            "/broken",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        )
        .route("/garbage", get(|| async { "<html>gateway timeout</html>" }));
    spawn_server(router).await
}

fn http_source(addr: SocketAddr, path: &str) -> HttpTimeEntrySource {
    HttpTimeEntrySource::new(&SourceConfig {
        url: format!("http://{}{}", addr, path),
        timeout_secs: 5,
    })
    .unwrap()
}

// =============================================================================
// SECTION 1: Report Endpoints
// =============================================================================

#[tokio::test]
async fn test_summary_excludes_zero_hour_employees() {
    let (status, content_type, bytes) =
        post(create_router_for_test(), "/report/summary", &sample_entries()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type, "application/json");

    let report: Value = serde_json::from_slice(&bytes).unwrap();
    let summaries = report["summaries"].as_array().unwrap();
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0]["name"], "Alice");
    assert_eq!(summaries[0]["total_hours"], 8.5);
    assert_eq!(report["slices"][0]["percentage"], 100.0);
    assert_eq!(report["slices"][0]["color_index"], 0);
}

#[tokio::test]
async fn test_summary_ranks_by_hours() {
    let body = json!([
        entry("Carol", "2026-01-15T09:00:00", "2026-01-15T10:00:00"),
        entry("Alice", "2026-01-15T09:00:00", "2026-01-15T12:00:00"),
        entry("Bob", "2026-01-15T09:00:00", "2026-01-15T11:00:00"),
        entry("Carol", "2026-01-16T09:00:00", "2026-01-16T09:30:00"),
    ]);
    let (status, _, bytes) = post(create_router_for_test(), "/report/summary", &body).await;
    assert_eq!(status, StatusCode::OK);

    let report: Value = serde_json::from_slice(&bytes).unwrap();
    let names: Vec<&str> = report["summaries"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Alice", "Bob", "Carol"]);

    let total: f64 = report["slices"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["percentage"].as_f64().unwrap())
        .sum();
    assert!((total - 100.0).abs() < 1e-9);
}

#[tokio::test]
async fn test_summary_counts_skipped_records() {
    let body = json!([
        entry("Alice", "2026-01-15T09:00:00", "2026-01-15T17:00:00"),
        {"EmployeeName": null, "StarTimeUtc": "2026-01-15T09:00:00", "EndTimeUtc": "2026-01-15T17:00:00"},
        {"EmployeeName": "Dave", "StarTimeUtc": "not a time", "EndTimeUtc": "2026-01-15T17:00:00"},
    ]);
    let (status, _, bytes) = post(create_router_for_test(), "/report/summary", &body).await;
    assert_eq!(status, StatusCode::OK);

    let report: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(report["skipped_unnamed"], 1);
    assert_eq!(report["skipped_malformed"], 1);
    assert_eq!(report["summaries"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_chart_returns_png_of_configured_size() {
    let (status, content_type, bytes) =
        post(create_router_for_test(), "/report/chart", &sample_entries()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type, "image/png");
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");

    // IHDR carries width then height as big-endian u32s.
    let width = u32::from_be_bytes([bytes[16], bytes[17], bytes[18], bytes[19]]);
    let height = u32::from_be_bytes([bytes[20], bytes[21], bytes[22], bytes[23]]);
    assert_eq!((width, height), (800, 600));
}

#[tokio::test]
async fn test_chart_for_empty_input_still_renders() {
    let (status, content_type, bytes) =
        post(create_router_for_test(), "/report/chart", &json!([])).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type, "image/png");
    assert!(!bytes.is_empty());
}

#[tokio::test]
async fn test_table_marks_low_hours_rows() {
    let body = json!([
        entry("Alice", "2026-01-01T00:00:00", "2026-01-05T04:00:00"),
        entry("Bob", "2026-01-15T09:00:00", "2026-01-15T17:00:00"),
    ]);
    let (status, content_type, bytes) = post(create_router_for_test(), "/report/table", &body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type, "text/html; charset=utf-8");

    let html = String::from_utf8(bytes).unwrap();
    assert!(html.contains("<title>Employee Time Worked</title>"));
    assert!(html.contains("<td>100.00</td>"));
    assert!(html.contains("<td>8.00</td>"));
    assert_eq!(html.matches(r#"<tr class="low-hours">"#).count(), 1);
    assert!(html.find("Alice").unwrap() < html.find("Bob").unwrap());
}

#[tokio::test]
async fn test_table_escapes_names() {
    let body = json!([entry(
        "<script>alert(1)</script>",
        "2026-01-15T09:00:00",
        "2026-01-15T10:00:00"
    )]);
    let (status, _, bytes) = post(create_router_for_test(), "/report/table", &body).await;
    assert_eq!(status, StatusCode::OK);

    let html = String::from_utf8(bytes).unwrap();
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
}

#[tokio::test]
async fn test_table_for_empty_input_has_no_rows() {
    let (status, _, bytes) = post(create_router_for_test(), "/report/table", &json!([])).await;
    assert_eq!(status, StatusCode::OK);

    let html = String::from_utf8(bytes).unwrap();
    assert!(html.contains("<tbody>"));
    assert!(!html.contains("<td>"));
}

#[tokio::test]
async fn test_non_array_body_returns_400() {
    let (status, content_type, bytes) =
        post(create_router_for_test(), "/report/summary", &json!({"entries": []})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(content_type, "application/json");

    let error: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(error["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_unknown_route_returns_404() {
    let (status, _, _) = post(create_router_for_test(), "/report/pdf", &sample_entries()).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// =============================================================================
// SECTION 2: HTTP Time Entry Source
// =============================================================================

#[tokio::test]
async fn test_http_source_fetches_entries() {
    let addr = spawn_source_server().await;

    let entries = http_source(addr, "/entries").fetch().await.unwrap();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].employee_name.as_deref(), Some("Alice"));
    assert_eq!(
        entries[0].start_time_utc.as_deref(),
        Some("2026-01-15T09:00:00")
    );
}

#[tokio::test]
async fn test_http_source_empty_list() {
    let addr = spawn_source_server().await;

    let entries = http_source(addr, "/empty").fetch().await.unwrap();
    assert!(entries.is_empty());
}

#[tokio::test]
async fn test_http_source_error_status_is_unavailable() {
    let addr = spawn_source_server().await;

    let err = http_source(addr, "/broken").fetch().await.unwrap_err();
    match err {
        ReportError::SourceUnavailable { message } => assert!(message.contains("500")),
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_http_source_non_json_is_malformed() {
    let addr = spawn_source_server().await;

    let err = http_source(addr, "/garbage").fetch().await.unwrap_err();
    assert!(matches!(err, ReportError::MalformedPayload { .. }));
}

// =============================================================================
// SECTION 3: End-to-End
// =============================================================================

#[tokio::test]
async fn test_generate_report_from_http_source() {
    let addr = spawn_source_server().await;

    let report = generate_report(&http_source(addr, "/entries")).await.unwrap();
    assert_eq!(report.summaries.len(), 1);
    assert_eq!(report.summaries[0].name, "Alice");
    assert_eq!(report.summaries[0].total_hours, 8.5);
    assert_eq!(report.slices[0].percentage, 100.0);

    let config = ConfigLoader::default().into_config();
    let png = report.render_chart_png(&config.chart).unwrap();
    assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");

    let html = report.render_html_table(&config.table);
    assert_eq!(html.matches(r#"<tr class="low-hours">"#).count(), 1);
}

#[tokio::test]
async fn test_generate_report_fails_when_source_is_down() {
    let addr = spawn_source_server().await;

    let err = generate_report(&http_source(addr, "/broken")).await.unwrap_err();
    assert!(matches!(err, ReportError::SourceUnavailable { .. }));
}
