use anyhow::{Context, Result};
use clap::Parser;
use drift_report::api::format_file;
use drift_report::report::{OutputFormat, ReportOptions, DEFAULT_MAX_LISTED};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const USAGE: &str = "Usage: drift-report <drift-log-file>";

const EXIT_USAGE: u8 = 1;
const EXIT_READ_FAILURE: u8 = 2;

#[derive(Parser, Debug)]
#[command(name = "drift-report")]
#[command(about = "Summarize schema drift checker logs as a markdown CI annotation", long_about = None)]
struct Cli {
    /// Drift checker log file
    log_file: Option<PathBuf>,

    /// Output format (markdown or json)
    #[arg(long, env = "DRIFT_REPORT_FORMAT", default_value_t = OutputFormat::Markdown)]
    format: OutputFormat,

    /// Maximum index and trigger names listed per section
    #[arg(long, env = "DRIFT_REPORT_MAX_LISTED", default_value_t = DEFAULT_MAX_LISTED)]
    max_listed: usize,
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let Some(log_file) = cli.log_file else {
        println!("{USAGE}");
        return ExitCode::from(EXIT_USAGE);
    };

    let options = ReportOptions::new(cli.format).with_max_listed(cli.max_listed);
    match render(&log_file, &options) {
        Ok(report) => {
            println!("{report}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(EXIT_READ_FAILURE)
        }
    }
}

fn render(log_file: &Path, options: &ReportOptions) -> Result<String> {
    info!(path = %log_file.display(), format = %options.format, "summarizing drift log");
    format_file(log_file, options)
        .with_context(|| format!("could not summarize {}", log_file.display()))
}

/// Logs go to stderr so stdout carries only the report.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_level(true)
                .compact(),
        )
        .init();
}
