//! Time entry models.
//!
//! [`RawTimeEntry`] mirrors the upstream JSON record with every field
//! optional. [`TimeEntry`] is the validated form with parsed UTC timestamps.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ReportError;

/// Offset-less timestamp layouts accepted from the source, read as UTC.
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// A time entry exactly as delivered by the source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawTimeEntry {
    /// The employee name, possibly null or blank.
    #[serde(rename = "EmployeeName", default)]
    pub employee_name: Option<String>,
    /// The start timestamp. The upstream field is spelled `StarTimeUtc`.
    #[serde(rename = "StarTimeUtc", alias = "StartTimeUtc", default)]
    pub start_time_utc: Option<String>,
    /// The end timestamp.
    #[serde(rename = "EndTimeUtc", default)]
    pub end_time_utc: Option<String>,
}

impl RawTimeEntry {
    /// Returns true when the record names an employee.
    ///
    /// Null, empty and whitespace-only names are unnamed.
    pub fn has_employee_name(&self) -> bool {
        self.employee_name
            .as_deref()
            .is_some_and(|name| !name.trim().is_empty())
    }
}

/// A validated time entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEntry {
    /// The employee name, verbatim from the source.
    pub employee_name: String,
    /// The start of the worked interval.
    pub start_time_utc: DateTime<Utc>,
    /// The end of the worked interval.
    pub end_time_utc: DateTime<Utc>,
}

impl TimeEntry {
    /// Returns the worked hours for the entry.
    ///
    /// An entry that ends at or before its start counts as zero hours.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use timesheet_report::models::TimeEntry;
    ///
    /// let entry = TimeEntry {
    ///     employee_name: "Alice".to_string(),
    ///     start_time_utc: Utc.with_ymd_and_hms(2026, 1, 15, 9, 0, 0).unwrap(),
    ///     end_time_utc: Utc.with_ymd_and_hms(2026, 1, 15, 17, 30, 0).unwrap(),
    /// };
    /// assert_eq!(entry.hours_worked(), 8.5);
    /// ```
    pub fn hours_worked(&self) -> f64 {
        if self.start_time_utc >= self.end_time_utc {
            return 0.0;
        }
        let millis = (self.end_time_utc - self.start_time_utc).num_milliseconds();
        millis as f64 / 3_600_000.0
    }
}

impl TryFrom<&RawTimeEntry> for TimeEntry {
    type Error = ReportError;

    fn try_from(raw: &RawTimeEntry) -> Result<Self, Self::Error> {
        let employee_name = match raw.employee_name.as_deref() {
            Some(name) if !name.trim().is_empty() => name.to_string(),
            _ => {
                return Err(ReportError::MalformedRecord {
                    field: "EmployeeName".to_string(),
                    message: "missing or blank".to_string(),
                });
            }
        };

        Ok(Self {
            employee_name,
            start_time_utc: required_timestamp("StarTimeUtc", raw.start_time_utc.as_deref())?,
            end_time_utc: required_timestamp("EndTimeUtc", raw.end_time_utc.as_deref())?,
        })
    }
}

fn required_timestamp(field: &str, value: Option<&str>) -> Result<DateTime<Utc>, ReportError> {
    let value = value.ok_or_else(|| ReportError::MalformedRecord {
        field: field.to_string(),
        message: "missing".to_string(),
    })?;

    parse_timestamp(value).ok_or_else(|| ReportError::MalformedRecord {
        field: field.to_string(),
        message: format!("unparseable timestamp '{}'", value),
    })
}

/// Parses a source timestamp into UTC.
///
/// RFC 3339 values are converted from their offset; values without an
/// offset are taken to already be UTC.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|naive| naive.and_utc())
}
