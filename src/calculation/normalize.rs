//! Time entry normalization.
//!
//! Filters raw source records down to named entries with valid timestamps.

use tracing::{debug, warn};

use crate::models::{RawTimeEntry, TimeEntry};

/// The entries kept by [`normalize_entries`] and what was dropped.
#[derive(Debug, Clone, Default)]
pub struct NormalizationResult {
    /// Named entries with parsed timestamps, in source order.
    pub entries: Vec<TimeEntry>,
    /// Records dropped for a null, empty or whitespace-only name.
    pub skipped_unnamed: usize,
    /// Named records dropped for a missing or unparseable timestamp.
    pub skipped_malformed: usize,
}

/// Normalizes raw source records.
///
/// Unnamed records are dropped silently. Named records whose timestamps
/// cannot be read are dropped with a warning. Neither is an error.
pub fn normalize_entries(raw_entries: &[RawTimeEntry]) -> NormalizationResult {
    let mut result = NormalizationResult::default();

    for (index, raw) in raw_entries.iter().enumerate() {
        if !raw.has_employee_name() {
            result.skipped_unnamed += 1;
            continue;
        }

        match TimeEntry::try_from(raw) {
            Ok(entry) => result.entries.push(entry),
            Err(err) => {
                warn!(index, error = %err, "Skipping malformed time entry");
                result.skipped_malformed += 1;
            }
        }
    }

    debug!(
        kept = result.entries.len(),
        skipped_unnamed = result.skipped_unnamed,
        skipped_malformed = result.skipped_malformed,
        "Normalized time entries"
    );

    result
}
