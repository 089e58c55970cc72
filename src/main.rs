//! CLI entry point for the student score chart tool.
//!
//! Provides subcommands for listing the configured worksheets, listing the
//! students found in one worksheet, and charting one or more students
//! against the class average.

use anyhow::Result;
use clap::{Parser, Subcommand};
use score_chart::config::DashboardConfig;
use score_chart::dashboard::Dashboard;
use score_chart::error::PipelineError;
use score_chart::fetch::{BasicClient, auth::UrlParam};
use score_chart::output::{append_record, print_chart_json, print_detail};
use score_chart::source::{CsvExportClient, SheetSource, ValuesApiClient};
use std::ffi::OsStr;
use std::path::Path;
use tracing::{error, info};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "score_chart")]
#[command(about = "Charts student scores from a Google Sheet against the class average", long_about = None)]
struct Cli {
    /// Path to the JSON configuration file
    #[arg(short, long, default_value = "score_chart.json")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the configured worksheet (subject) names
    Worksheets,
    /// List the students found in a worksheet
    Students {
        /// Worksheet name, one of the configured subjects
        #[arg(short, long)]
        worksheet: String,
    },
    /// Chart one or more students against the class average
    Chart {
        /// Worksheet name, one of the configured subjects
        #[arg(short, long)]
        worksheet: String,

        /// Student name; repeat to chart several students in one run
        #[arg(short, long = "student", required = true)]
        students: Vec<String>,

        /// CSV file to append comparison rows to
        #[arg(short, long)]
        output: Option<String>,

        /// Print the chart document as JSON instead of the detail table
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/score_chart.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("score_chart.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse().unwrap()));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse().unwrap()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();
    let config = DashboardConfig::load(&cli.config)?;

    match cli.command {
        Commands::Worksheets => {
            for name in &config.worksheets {
                println!("{name}");
            }
        }
        Commands::Students { worksheet } => {
            check_worksheet(&config, &worksheet)?;
            let mut dashboard = Dashboard::new(build_source(&config), &config);
            let students = dashboard.students(&worksheet).await?;
            for name in students {
                println!("{name}");
            }
        }
        Commands::Chart {
            worksheet,
            students,
            output,
            json,
        } => {
            check_worksheet(&config, &worksheet)?;
            let mut dashboard = Dashboard::new(build_source(&config), &config);

            for student in &students {
                // One interaction per student; a missing student halts that
                // interaction but not the whole run.
                match dashboard.comparison(&worksheet, student).await {
                    Ok(comparison) => {
                        if json {
                            print_chart_json(&comparison)?;
                        } else {
                            print_detail(&comparison);
                        }
                        if let Some(path) = &output {
                            append_record(path, &comparison)?;
                        }
                    }
                    Err(e @ PipelineError::NotFound(_)) => {
                        error!(student = %student, error = %e, "Skipping student");
                        eprintln!("{e}");
                    }
                    Err(e) => return Err(e.into()),
                }
            }
        }
    }

    Ok(())
}

/// Builds the worksheet source: the values API when an API key is present,
/// otherwise the public CSV export.
fn build_source(config: &DashboardConfig) -> Box<dyn SheetSource> {
    let http = BasicClient::new();

    match std::env::var("SHEETS_API_KEY") {
        Ok(key) if !key.is_empty() => {
            info!("Using Sheets values API");
            Box::new(ValuesApiClient::new(
                config.spreadsheet_id.clone(),
                UrlParam::api_key(http, key),
            ))
        }
        _ => {
            info!("No SHEETS_API_KEY set, using public CSV export");
            Box::new(CsvExportClient::new(config.spreadsheet_id.clone(), http))
        }
    }
}

/// The worksheet choice is an enumerated set; anything else is refused with
/// the valid options.
fn check_worksheet(config: &DashboardConfig, worksheet: &str) -> Result<()> {
    if config.worksheets.iter().any(|w| w == worksheet) {
        Ok(())
    } else {
        anyhow::bail!(
            "unknown worksheet '{}'; configured worksheets: {}",
            worksheet,
            config.worksheets.join(", ")
        )
    }
}
