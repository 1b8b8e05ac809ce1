//! Time entry sources.
//!
//! The pipeline takes its input through the [`TimeEntrySource`] capability
//! so the HTTP endpoint can be swapped for in-memory data.

mod http;

use std::future::Future;

use crate::error::{ReportError, ReportResult};
use crate::models::RawTimeEntry;

pub use http::HttpTimeEntrySource;

/// Something that can deliver the raw time entries for one report run.
pub trait TimeEntrySource {
    /// Fetches all raw entries.
    ///
    /// A failure aborts the run. An empty list is a valid result.
    fn fetch(&self) -> impl Future<Output = ReportResult<Vec<RawTimeEntry>>> + Send;
}

/// A source backed by entries already in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticTimeEntrySource {
    entries: Vec<RawTimeEntry>,
}

impl StaticTimeEntrySource {
    /// Creates a source that always returns `entries`.
    pub fn new(entries: Vec<RawTimeEntry>) -> Self {
        Self { entries }
    }

    /// Creates a source from a JSON document.
    pub fn from_json(body: &str) -> ReportResult<Self> {
        Ok(Self::new(parse_entries(body)?))
    }
}

impl TimeEntrySource for StaticTimeEntrySource {
    async fn fetch(&self) -> ReportResult<Vec<RawTimeEntry>> {
        Ok(self.entries.clone())
    }
}

/// Parses a source body into raw entries.
///
/// The body must be a JSON array of records; `null` counts as an empty
/// array.
pub fn parse_entries(body: &str) -> ReportResult<Vec<RawTimeEntry>> {
    let entries: Option<Vec<RawTimeEntry>> =
        serde_json::from_str(body).map_err(|e| ReportError::MalformedPayload {
            message: e.to_string(),
        })?;
    Ok(entries.unwrap_or_default())
}
