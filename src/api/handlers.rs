//! HTTP request handlers for the timesheet report API.
//!
//! Every endpoint takes the same body, a JSON array of time entries in
//! the source format, and runs its own report pipeline over it.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::ReportError;
use crate::models::RawTimeEntry;
use crate::pipeline::TimesheetReport;

use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Request body accepted by every endpoint; `null` counts as no entries.
type EntriesPayload = Result<Json<Option<Vec<RawTimeEntry>>>, JsonRejection>;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/report/summary", post(summary_handler))
        .route("/report/chart", post(chart_handler))
        .route("/report/table", post(table_handler))
        .with_state(state)
}

/// Handler for POST /report/summary.
///
/// Returns the aggregated report as JSON.
async fn summary_handler(payload: EntriesPayload) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing summary request");

    let report = match build_report(correlation_id, payload) {
        Ok(report) => report,
        Err(response) => return response,
    };

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(report),
    )
        .into_response()
}

/// Handler for POST /report/chart.
///
/// Returns the pie chart as a PNG image.
async fn chart_handler(State(state): State<AppState>, payload: EntriesPayload) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing chart request");

    let report = match build_report(correlation_id, payload) {
        Ok(report) => report,
        Err(response) => return response,
    };

    let start = Instant::now();
    match report.render_chart_png(&state.config().chart) {
        Ok(png) => {
            info!(
                correlation_id = %correlation_id,
                bytes = png.len(),
                duration_us = start.elapsed().as_micros(),
                "Chart rendered"
            );
            (StatusCode::OK, [(header::CONTENT_TYPE, "image/png")], png).into_response()
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for POST /report/table.
///
/// Returns the HTML table document.
async fn table_handler(State(state): State<AppState>, payload: EntriesPayload) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing table request");

    let report = match build_report(correlation_id, payload) {
        Ok(report) => report,
        Err(response) => return response,
    };

    let html = report.render_html_table(&state.config().table);
    info!(
        correlation_id = %correlation_id,
        rows = report.summaries.len(),
        "Table rendered"
    );
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
        html,
    )
        .into_response()
}

/// Unwraps the request body and aggregates it, or builds the 400 response.
fn build_report(correlation_id: Uuid, payload: EntriesPayload) -> Result<TimesheetReport, Response> {
    let entries = match payload {
        Ok(Json(entries)) => entries.unwrap_or_default(),
        Err(rejection) => return Err(rejection_response(correlation_id, rejection)),
    };

    let start = Instant::now();
    let report = TimesheetReport::from_raw_entries(&entries);
    info!(
        correlation_id = %correlation_id,
        records = entries.len(),
        employees = report.summaries.len(),
        skipped_unnamed = report.skipped_unnamed,
        skipped_malformed = report.skipped_malformed,
        duration_us = start.elapsed().as_micros(),
        "Aggregated time entries"
    );
    Ok(report)
}

fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            ApiError::malformed_json(body_text)
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    ApiErrorResponse {
        status: StatusCode::BAD_REQUEST,
        error,
    }
    .into_response()
}

fn error_response(correlation_id: Uuid, err: ReportError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Report request failed"
    );
    ApiErrorResponse::from(err).into_response()
}
