//! Calculation logic for the timesheet report engine.
//!
//! This module contains time entry normalization, per-employee hour
//! aggregation and ranking, percentage shares, and chart color assignment.

mod aggregate;
mod normalize;
mod palette;

pub use aggregate::{aggregate_hours, build_chart_slices};
pub use normalize::{NormalizationResult, normalize_entries};
pub use palette::{CHART_PALETTE, color_for_rank, palette_index};
