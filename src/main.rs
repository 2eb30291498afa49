use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{ensure, Context, Result};
use clap::Parser;

use bikeshare_explorer::config::{SessionConfig, DEFAULT_PAGE_SIZE};
use bikeshare_explorer::ingestion::LogObserver;
use bikeshare_explorer::session::Session;

/// Explore US bike share data for Chicago, New York City and Washington.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Directory containing chicago.csv, new_york_city.csv and washington.csv
    #[arg(long, default_value = ".")]
    data_dir: PathBuf,

    /// Number of raw rows shown per page
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    page_size: usize,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off")).init();

    let args = Args::parse();
    ensure!(args.page_size > 0, "--page-size must be at least 1");

    let config = SessionConfig {
        data_dir: args.data_dir,
        page_size: args.page_size,
    };
    log::debug!("starting session with {config:?}");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::with_observer(
        stdin.lock(),
        stdout.lock(),
        &config,
        Some(Arc::new(LogObserver)),
    );
    session.run().context("interactive session failed")?;
    Ok(())
}
