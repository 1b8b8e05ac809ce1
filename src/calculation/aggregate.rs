//! Hour aggregation and percentage shares.
//!
//! Totals are grouped by exact employee name, ranked by hours descending,
//! and turned into chart slices whose percentages sum to 100.

use std::collections::HashMap;

use crate::models::{EmployeeChartSlice, EmployeeSummary, TimeEntry};

use super::palette::{color_for_rank, palette_index};

/// Sums worked hours per employee and ranks the totals.
///
/// Names are compared exactly (case-sensitive). Employees whose total is
/// not positive are dropped. The result is sorted by total hours
/// descending; equal totals keep the order in which the employee first
/// appeared.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use timesheet_report::calculation::aggregate_hours;
/// use timesheet_report::models::TimeEntry;
///
/// let day = |h: u32, m: u32| Utc.with_ymd_and_hms(2026, 1, 15, h, m, 0).unwrap();
/// let entry = |name: &str, start, end| TimeEntry {
///     employee_name: name.to_string(),
///     start_time_utc: start,
///     end_time_utc: end,
/// };
///
/// let summaries = aggregate_hours(&[
///     entry("Alice", day(9, 0), day(17, 0)),
///     entry("Bob", day(9, 0), day(9, 0)),
///     entry("Alice", day(8, 0), day(8, 30)),
/// ]);
///
/// assert_eq!(summaries.len(), 1);
/// assert_eq!(summaries[0].name, "Alice");
/// assert_eq!(summaries[0].total_hours, 8.5);
/// ```
pub fn aggregate_hours(entries: &[TimeEntry]) -> Vec<EmployeeSummary> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut totals: Vec<(&str, f64)> = Vec::new();

    for entry in entries {
        let hours = entry.hours_worked();
        match positions.get(entry.employee_name.as_str()) {
            Some(&position) => totals[position].1 += hours,
            None => {
                positions.insert(entry.employee_name.as_str(), totals.len());
                totals.push((entry.employee_name.as_str(), hours));
            }
        }
    }

    totals.retain(|(_, hours)| *hours > 0.0);
    // Vec::sort_by is stable, so ties keep first-seen order.
    totals.sort_by(|a, b| b.1.total_cmp(&a.1));

    totals
        .into_iter()
        .map(|(name, hours)| EmployeeSummary::new(name, hours))
        .collect()
}

/// Builds chart slices from ranked summaries.
///
/// Each slice gets its share of the grand total and the palette color for
/// its rank. Summaries without positive hours are ignored; when none
/// remain the result is empty.
pub fn build_chart_slices(summaries: &[EmployeeSummary]) -> Vec<EmployeeChartSlice> {
    let positive: Vec<&EmployeeSummary> =
        summaries.iter().filter(|s| s.total_hours > 0.0).collect();
    let grand_total: f64 = positive.iter().map(|s| s.total_hours).sum();

    if grand_total <= 0.0 {
        return Vec::new();
    }

    positive
        .into_iter()
        .enumerate()
        .map(|(rank, summary)| EmployeeChartSlice {
            name: summary.name.clone(),
            total_hours: summary.total_hours,
            percentage: summary.total_hours / grand_total * 100.0,
            color_index: palette_index(rank),
            color: color_for_rank(rank),
        })
        .collect()
}
