//! `batch-check` entry-point: load endpoints, validate them, report.

use batch_check::check::check_endpoints;
use batch_check::cli::CheckCli;
use batch_check::config::load_config;
use batch_check::error::Result;
use batch_check::report::print_report;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    init_tracing();
    run().map_err(color_eyre::eyre::Report::from)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<()> {
    let cli = CheckCli::parse();
    let config = load_config(&cli)?;
    let endpoints = check_endpoints(&config)?;
    print_report(&endpoints)?;
    Ok(())
}
