//! Configuration types for report generation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file. Every section and
//! field has a default, so a partial file is valid.

use serde::{Deserialize, Serialize};

/// Complete report configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Where time entries are fetched from.
    pub source: SourceConfig,
    /// Pie chart settings.
    pub chart: ChartConfig,
    /// HTML table settings.
    pub table: TableConfig,
    /// Output file locations.
    pub output: OutputConfig,
}

/// Time entry source settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// URL returning a JSON array of time entries.
    pub url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            timeout_secs: 30,
        }
    }
}

/// Pie chart settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Title centered above the chart.
    pub title: String,
    /// Heading above the legend.
    pub legend_title: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            title: "Employee Work Hours Distribution".to_string(),
            legend_title: "Employee Work Hours".to_string(),
        }
    }
}

/// HTML table settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Page title and heading.
    pub title: String,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            title: "Employee Time Worked".to_string(),
        }
    }
}

/// Output file locations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Where the PNG chart is written.
    pub chart_path: String,
    /// Where the HTML table is written.
    pub table_path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            chart_path: "employee_pie_chart.png".to_string(),
            table_path: "employee_table.html".to_string(),
        }
    }
}
