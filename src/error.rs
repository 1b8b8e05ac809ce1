//! Error types for the timesheet report engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure that can abort a report run.

use thiserror::Error;

/// The main error type for the timesheet report engine.
///
/// # Example
///
/// ```
/// use timesheet_report::error::ReportError;
///
/// let error = ReportError::SourceUnavailable {
///     message: "status 503".to_string(),
/// };
/// assert_eq!(error.to_string(), "Time entry source unavailable: status 503");
/// ```
#[derive(Debug, Error)]
pub enum ReportError {
    /// The time-entry source could not be reached or answered with a
    /// non-success status.
    #[error("Time entry source unavailable: {message}")]
    SourceUnavailable {
        /// A description of the transport or status failure.
        message: String,
    },

    /// The source body was not a JSON list of time entries.
    #[error("Malformed time entry payload: {message}")]
    MalformedPayload {
        /// The underlying parse error.
        message: String,
    },

    /// A single record had a missing or unparseable field.
    #[error("Malformed time entry field '{field}': {message}")]
    MalformedRecord {
        /// The offending field.
        field: String,
        /// A description of the problem.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed or held invalid values.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The chart image could not be composed or encoded.
    #[error("Render failure: {message}")]
    RenderFailure {
        /// A description of the render failure.
        message: String,
    },

    /// A rendered artifact could not be written.
    #[error("Failed to write '{path}': {message}")]
    OutputWrite {
        /// The destination path.
        path: String,
        /// The I/O error.
        message: String,
    },

    /// The HTTP server could not bind or stopped with an error.
    #[error("Server error: {message}")]
    ServerError {
        /// A description of the server failure.
        message: String,
    },
}

/// A type alias for Results that return ReportError.
pub type ReportResult<T> = Result<T, ReportError>;
