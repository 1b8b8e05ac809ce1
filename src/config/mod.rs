//! Configuration loading and management for report generation.
//!
//! This module loads the report configuration from YAML: the time entry
//! source, chart and table presentation settings, and output locations.
//!
//! # Example
//!
//! ```no_run
//! use timesheet_report::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/report.yaml").unwrap();
//! println!("Chart title: {}", config.config().chart.title);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{ChartConfig, OutputConfig, ReportConfig, SourceConfig, TableConfig};
