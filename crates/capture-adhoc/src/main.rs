mod cli;
mod config;
mod params;
mod runner;

use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::HarnessConfig;
use crate::params::TestParams;
use crate::runner::{PlanRunner, TestRunner};

fn main() -> Result<()> {
    // A missing .env is the normal case.
    dotenvy::dotenv().ok();
    let config = HarnessConfig::from_env()?;
    init_tracing(config.log_filter.as_deref());

    let app = cli::application();
    let args: Vec<String> = std::env::args().skip(1).collect();

    match args.first().map(String::as_str) {
        Some("-h" | "--help" | "help") => {
            app.print_usage();
            return Ok(());
        }
        Some("-V" | "--version") => {
            print!("{}", app.version_line());
            return Ok(());
        }
        _ => {}
    }

    let params = match app.parse_validated(&args) {
        Ok(params) => params,
        Err(err) if err.is_invalid_input() => {
            tracing::debug!(?args, "rejected arguments");
            eprintln!("{err}");
            app.print_usage();
            std::process::exit(1);
        }
        // Malformed numbers skip the usage path.
        Err(err) => return Err(err).context("failed to read test parameters"),
    };

    let mut runner = PlanRunner::new(std::io::stdout().lock(), config.format);
    if !run_test(&mut runner, &params)? {
        std::process::exit(1);
    }

    Ok(())
}

fn run_test(runner: &mut impl TestRunner, params: &TestParams) -> Result<bool> {
    tracing::debug!(test = params.name(), "executing test");

    let passed = runner.run(params)?;
    if passed {
        tracing::info!(test = params.name(), "test passed");
    } else {
        tracing::warn!(test = params.name(), "test failed");
    }
    Ok(passed)
}

fn init_tracing(filter: Option<&str>) {
    let filter = filter
        .and_then(|f| EnvFilter::try_new(f).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
