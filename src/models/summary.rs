//! Per-employee summary models.
//!
//! This module defines the aggregated [`EmployeeSummary`] consumed by the
//! HTML table and the [`EmployeeChartSlice`] consumed by the pie chart.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Decimal places kept for reported hours.
pub const HOURS_DECIMAL_PLACES: u32 = 2;

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Creates a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Total hours worked by one employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeSummary {
    /// The employee name.
    pub name: String,
    /// The unrounded total of all entry durations.
    pub total_hours: f64,
    /// The total rounded to two decimal places, midpoint away from zero.
    pub rounded_hours: Decimal,
}

impl EmployeeSummary {
    /// Creates a summary, deriving the rounded hours from the total.
    ///
    /// # Examples
    ///
    /// ```
    /// use rust_decimal::Decimal;
    /// use timesheet_report::models::EmployeeSummary;
    ///
    /// let summary = EmployeeSummary::new("Alice", 8.505);
    /// assert_eq!(summary.rounded_hours, Decimal::new(851, 2));
    /// ```
    pub fn new(name: impl Into<String>, total_hours: f64) -> Self {
        Self {
            name: name.into(),
            total_hours,
            rounded_hours: round_hours(total_hours),
        }
    }
}

/// Rounds an hour total for display.
///
/// Totals that cannot be represented as a decimal (NaN, infinite) report zero.
pub fn round_hours(hours: f64) -> Decimal {
    Decimal::from_f64(hours)
        .unwrap_or(Decimal::ZERO)
        .round_dp_with_strategy(HOURS_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// A summary with its share of all hours and its chart color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeChartSlice {
    /// The employee name.
    pub name: String,
    /// The unrounded total hours.
    pub total_hours: f64,
    /// Share of the grand total, in (0, 100].
    pub percentage: f64,
    /// Index into the chart palette.
    pub color_index: usize,
    /// The palette color at `color_index`.
    pub color: Rgb,
}

impl EmployeeChartSlice {
    /// Returns the wedge sweep in degrees.
    pub fn sweep_degrees(&self) -> f64 {
        self.percentage * 3.6
    }
}
