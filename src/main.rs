//! Timesheet report - entry point.
//!
//! Without `--serve`, fetches time entries from the configured source once
//! and writes the pie chart and HTML table. With `--serve <addr>`, runs the
//! HTTP API instead.

use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use timesheet_report::api::{AppState, create_router};
use timesheet_report::config::{ConfigLoader, ReportConfig};
use timesheet_report::error::{ReportError, ReportResult};
use timesheet_report::pipeline::generate_report;
use timesheet_report::source::HttpTimeEntrySource;

/// Command line interface for the timesheet report generator
#[derive(Parser, Debug)]
#[command(name = "timesheet-report")]
#[command(about = "Employee hours pie chart and HTML table generator")]
#[command(version)]
struct Cli {
    /// Path to the YAML configuration file; defaults apply when it is absent
    #[arg(short, long, default_value = "config/report.yaml")]
    config: PathBuf,

    /// Serve the HTTP API on this address instead of a one-shot run
    #[arg(long, value_name = "ADDR")]
    serve: Option<SocketAddr>,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let result = match ConfigLoader::load_or_default(&cli.config) {
        Ok(loader) => match cli.serve {
            Some(addr) => serve(addr, loader).await,
            None => run_once(loader.config()).await,
        },
        Err(err) => Err(err),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "Report generation failed");
            ExitCode::FAILURE
        }
    }
}

async fn run_once(config: &ReportConfig) -> ReportResult<()> {
    let source = HttpTimeEntrySource::new(&config.source)?;
    let report = generate_report(&source).await?;

    let png = report.render_chart_png(&config.chart)?;
    write_output(&config.output.chart_path, &png)?;

    let html = report.render_html_table(&config.table);
    write_output(&config.output.table_path, html.as_bytes())?;

    info!(employees = report.summaries.len(), "Report complete");
    Ok(())
}

fn write_output(path: &str, contents: &[u8]) -> ReportResult<()> {
    fs::write(path, contents).map_err(|e| ReportError::OutputWrite {
        path: path.to_string(),
        message: e.to_string(),
    })?;

    let shown = std::path::absolute(Path::new(path)).unwrap_or_else(|_| PathBuf::from(path));
    info!(path = %shown.display(), bytes = contents.len(), "Wrote report artifact");
    Ok(())
}

async fn serve(addr: SocketAddr, loader: ConfigLoader) -> ReportResult<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| ReportError::ServerError {
            message: format!("failed to bind {}: {}", addr, e),
        })?;

    info!(%addr, "Serving timesheet report API");
    axum::serve(listener, create_router(AppState::new(loader)))
        .await
        .map_err(|e| ReportError::ServerError {
            message: e.to_string(),
        })
}
