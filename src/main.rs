use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use applyform::commands::{RunOptions, cmd_run};
use applyform::locale::Locale;

#[derive(Parser)]
#[command(name = "applyform")]
#[command(about = "Terminal application form with a modal dialog")]
#[command(version)]
struct Cli {
    /// Path to the config file (default: platform config dir)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Simulated submission delay in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    /// UI language: ko, en
    #[arg(short, long, value_parser = parse_locale)]
    locale: Option<Locale>,

    /// Make every submission fail
    #[arg(long)]
    simulate_failure: bool,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn parse_locale(s: &str) -> Result<Locale, String> {
    s.parse()
        .map_err(|_| "Invalid locale. Must be one of: ko, en".to_string())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = cmd_run(RunOptions {
        config: cli.config,
        delay_ms: cli.delay_ms,
        locale: cli.locale,
        simulate_failure: cli.simulate_failure,
        log_file: cli.log_file,
    })
    .await;

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
