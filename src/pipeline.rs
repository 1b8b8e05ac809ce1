//! Report pipeline.
//!
//! Fetches raw entries from a [`TimeEntrySource`], normalizes and
//! aggregates them once, and hands the result to both renderers.

use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::calculation::{aggregate_hours, build_chart_slices, normalize_entries};
use crate::config::{ChartConfig, TableConfig};
use crate::error::ReportResult;
use crate::models::{EmployeeChartSlice, EmployeeSummary, RawTimeEntry};
use crate::render::{render_html_table, render_pie_chart_png};
use crate::source::TimeEntrySource;

/// The aggregated hours for one run, ready for rendering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimesheetReport {
    /// Per-employee totals, most hours first.
    pub summaries: Vec<EmployeeSummary>,
    /// The same employees with percentage shares and colors.
    pub slices: Vec<EmployeeChartSlice>,
    /// Source records dropped for having no employee name.
    pub skipped_unnamed: usize,
    /// Named source records dropped for unreadable timestamps.
    pub skipped_malformed: usize,
}

impl TimesheetReport {
    /// Builds a report from raw source records.
    ///
    /// # Examples
    ///
    /// ```
    /// use timesheet_report::models::RawTimeEntry;
    /// use timesheet_report::pipeline::TimesheetReport;
    ///
    /// let entry = |name: &str, start: &str, end: &str| RawTimeEntry {
    ///     employee_name: Some(name.to_string()),
    ///     start_time_utc: Some(start.to_string()),
    ///     end_time_utc: Some(end.to_string()),
    /// };
    ///
    /// let report = TimesheetReport::from_raw_entries(&[
    ///     entry("Alice", "2026-01-15T09:00:00", "2026-01-15T17:00:00"),
    ///     entry("Bob", "2026-01-15T09:00:00", "2026-01-15T09:00:00"),
    ///     entry("Alice", "2026-01-15T08:00:00", "2026-01-15T08:30:00"),
    /// ]);
    ///
    /// assert_eq!(report.summaries.len(), 1);
    /// assert_eq!(report.summaries[0].total_hours, 8.5);
    /// assert_eq!(report.slices[0].percentage, 100.0);
    /// ```
    pub fn from_raw_entries(raw_entries: &[RawTimeEntry]) -> Self {
        let normalized = normalize_entries(raw_entries);
        let summaries = aggregate_hours(&normalized.entries);
        let slices = build_chart_slices(&summaries);

        Self {
            summaries,
            slices,
            skipped_unnamed: normalized.skipped_unnamed,
            skipped_malformed: normalized.skipped_malformed,
        }
    }

    /// Returns true when no employee has positive hours.
    pub fn is_empty(&self) -> bool {
        self.summaries.is_empty()
    }

    /// Renders the pie chart as PNG bytes.
    pub fn render_chart_png(&self, config: &ChartConfig) -> ReportResult<Vec<u8>> {
        render_pie_chart_png(&self.slices, config)
    }

    /// Renders the HTML table document.
    pub fn render_html_table(&self, config: &TableConfig) -> String {
        render_html_table(&self.summaries, config)
    }
}

/// Fetches entries from `source` and aggregates them.
///
/// Source failures are returned unchanged; an empty source yields an empty
/// report.
pub async fn generate_report<S: TimeEntrySource>(source: &S) -> ReportResult<TimesheetReport> {
    let raw_entries = source.fetch().await?;

    let start = Instant::now();
    let report = TimesheetReport::from_raw_entries(&raw_entries);
    info!(
        records = raw_entries.len(),
        employees = report.summaries.len(),
        skipped_unnamed = report.skipped_unnamed,
        skipped_malformed = report.skipped_malformed,
        duration_us = start.elapsed().as_micros(),
        "Aggregated time entries"
    );

    Ok(report)
}
