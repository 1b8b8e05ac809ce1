//! Core data models for the timesheet report engine.
//!
//! This module contains the time entry and summary types passed between
//! the normalizer, the aggregator and the renderers.

mod summary;
mod time_entry;

pub use summary::{
    EmployeeChartSlice, EmployeeSummary, HOURS_DECIMAL_PLACES, Rgb, round_hours,
};
pub use time_entry::{RawTimeEntry, TimeEntry, parse_timestamp};
