//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the report
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{ReportError, ReportResult};

use super::types::ReportConfig;

/// Smallest canvas that still fits the chart region next to the legend.
const MIN_CHART_WIDTH: u32 = 301;
const MIN_CHART_HEIGHT: u32 = 101;

/// Loads and provides access to the report configuration.
///
/// # Example
///
/// ```no_run
/// use timesheet_report::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/report.yaml")?;
/// println!("Chart size: {}x{}", loader.config().chart.width, loader.config().chart.height);
/// # Ok::<(), timesheet_report::error::ReportError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: ReportConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified file.
    ///
    /// Returns `ConfigNotFound` when the file cannot be read and
    /// `ConfigParseError` when it is not valid YAML or holds invalid values.
    pub fn load<P: AsRef<Path>>(path: P) -> ReportResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| ReportError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let loader = Self::parse(&content, &path_str)?;
        info!(path = %path_str, "Loaded report configuration");
        Ok(loader)
    }

    /// Loads configuration from `path`, or uses defaults when the file does
    /// not exist.
    ///
    /// A file that exists but fails to parse is still an error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> ReportResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            info!(path = %path.display(), "No configuration file, using defaults");
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Parses configuration from YAML text.
    ///
    /// `path` is only used in error messages.
    pub fn parse(content: &str, path: &str) -> ReportResult<Self> {
        let config: ReportConfig =
            serde_yaml::from_str(content).map_err(|e| ReportError::ConfigParseError {
                path: path.to_string(),
                message: e.to_string(),
            })?;

        Self::validate(&config, path)?;
        Ok(Self { config })
    }

    /// Wraps an already built configuration.
    pub fn from_config(config: ReportConfig) -> ReportResult<Self> {
        Self::validate(&config, "<in-memory>")?;
        Ok(Self { config })
    }

    fn validate(config: &ReportConfig, path: &str) -> ReportResult<()> {
        let invalid = |message: String| ReportError::ConfigParseError {
            path: path.to_string(),
            message,
        };

        if config.chart.width < MIN_CHART_WIDTH || config.chart.height < MIN_CHART_HEIGHT {
            return Err(invalid(format!(
                "chart size {}x{} is below the minimum {}x{}",
                config.chart.width, config.chart.height, MIN_CHART_WIDTH, MIN_CHART_HEIGHT
            )));
        }
        if config.source.timeout_secs == 0 {
            return Err(invalid("source.timeout_secs must be positive".to_string()));
        }
        if config.output.chart_path.trim().is_empty() || config.output.table_path.trim().is_empty()
        {
            return Err(invalid("output paths must not be empty".to_string()));
        }

        Ok(())
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> ReportConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_path() -> String {
        format!("{}/config/report.yaml", env!("CARGO_MANIFEST_DIR"))
    }

    #[test]
    fn test_load_bundled_config() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let config = loader.config();

        assert_eq!(config.chart.width, 800);
        assert_eq!(config.chart.height, 600);
        assert_eq!(config.chart.title, "Employee Work Hours Distribution");
        assert!(config.source.url.starts_with("https://"));
        assert_eq!(config.output.chart_path, "employee_pie_chart.png");
    }

    #[test]
    fn test_missing_file() {
        let err = ConfigLoader::load("/nonexistent/report.yaml").unwrap_err();
        assert!(matches!(err, ReportError::ConfigNotFound { .. }));
        assert!(err.to_string().contains("/nonexistent/report.yaml"));
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let loader = ConfigLoader::load_or_default("/nonexistent/report.yaml").unwrap();
        assert_eq!(loader.config(), &ReportConfig::default());
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let loader = ConfigLoader::parse("chart:\n  width: 1024\n", "inline").unwrap();
        let config = loader.config();

        assert_eq!(config.chart.width, 1024);
        assert_eq!(config.chart.height, 600);
        assert_eq!(config.table.title, "Employee Time Worked");
        assert_eq!(config.source.timeout_secs, 30);
    }

    #[test]
    fn test_empty_yaml_uses_defaults() {
        let loader = ConfigLoader::parse("{}", "inline").unwrap();
        assert_eq!(loader.into_config(), ReportConfig::default());
    }

    #[test]
    fn test_invalid_yaml() {
        let err = ConfigLoader::parse("chart: [unclosed", "bad.yaml").unwrap_err();
        match err {
            ReportError::ConfigParseError { path, .. } => assert_eq!(path, "bad.yaml"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_wrong_type_is_parse_error() {
        let err = ConfigLoader::parse("chart:\n  width: wide\n", "bad.yaml").unwrap_err();
        assert!(matches!(err, ReportError::ConfigParseError { .. }));
    }

    #[test]
    fn test_rejects_tiny_canvas() {
        let err = ConfigLoader::parse("chart:\n  width: 200\n", "small.yaml").unwrap_err();
        assert!(err.to_string().contains("below the minimum"));
    }

    #[test]
    fn test_rejects_zero_timeout() {
        let err = ConfigLoader::parse("source:\n  timeout_secs: 0\n", "t.yaml").unwrap_err();
        assert!(err.to_string().contains("timeout_secs"));
    }

    #[test]
    fn test_from_config_validates() {
        let mut config = ReportConfig::default();
        config.output.table_path = " ".to_string();
        assert!(ConfigLoader::from_config(config).is_err());
        assert!(ConfigLoader::from_config(ReportConfig::default()).is_ok());
    }
}
