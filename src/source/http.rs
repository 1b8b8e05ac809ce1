//! HTTP time entry source.

use std::time::{Duration, Instant};

use tracing::{info, warn};

use crate::config::SourceConfig;
use crate::error::{ReportError, ReportResult};
use crate::models::RawTimeEntry;

use super::{TimeEntrySource, parse_entries};

/// Fetches time entries with a GET request to a JSON endpoint.
#[derive(Debug, Clone)]
pub struct HttpTimeEntrySource {
    http: reqwest::Client,
    url: String,
}

impl HttpTimeEntrySource {
    /// Creates a source for the configured endpoint.
    ///
    /// Returns `SourceUnavailable` if no URL is configured or the client
    /// cannot be built.
    pub fn new(config: &SourceConfig) -> ReportResult<Self> {
        if config.url.trim().is_empty() {
            return Err(ReportError::SourceUnavailable {
                message: "no source URL configured".to_string(),
            });
        }

        let http = reqwest::Client::builder()
            .user_agent(concat!("timesheet-report/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ReportError::SourceUnavailable {
                message: format!("failed to build HTTP client: {}", e),
            })?;

        Ok(Self {
            http,
            url: config.url.clone(),
        })
    }
}

impl TimeEntrySource for HttpTimeEntrySource {
    async fn fetch(&self) -> ReportResult<Vec<RawTimeEntry>> {
        let start = Instant::now();
        info!("Fetching time entries");

        let response = self.http.get(&self.url).send().await.map_err(|e| {
            // The URL may carry an access code, keep it out of logs.
            let e = e.without_url();
            warn!(error = %e, "Time entry request failed");
            ReportError::SourceUnavailable {
                message: format!("request failed: {}", e),
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "Time entry source returned an error status");
            return Err(ReportError::SourceUnavailable {
                message: format!("source returned status {}", status),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ReportError::SourceUnavailable {
                message: format!("failed to read response body: {}", e.without_url()),
            })?;

        let entries = parse_entries(&body)?;
        info!(
            count = entries.len(),
            duration_ms = start.elapsed().as_millis(),
            "Fetched time entries"
        );
        Ok(entries)
    }
}
