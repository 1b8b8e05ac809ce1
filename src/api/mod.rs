//! HTTP API module for the timesheet report engine.
//!
//! This module serves the report pipeline over HTTP: callers post a JSON
//! array of time entries and receive the summary, the pie chart, or the
//! HTML table.

mod handlers;
mod response;
mod state;

pub use handlers::create_router;
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
