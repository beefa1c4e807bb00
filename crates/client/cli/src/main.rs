//! Terminal client entry point.
mod app;
mod config;
mod input;
mod logging;
mod presentation;

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::app::RaceApp;
use crate::config::CliConfig;
use crate::input::Console;

/// Turn-based inertia racing on a grid
#[derive(Parser, Debug)]
#[command(name = "race")]
#[command(about = "Turn-based inertia racing on a grid", long_about = None)]
#[command(version)]
pub struct Args {
    /// Track to race (file stem under `tracks/`); asks when omitted
    #[arg(value_name = "TRACK")]
    track: Option<String>,

    /// Directory holding `config.toml` and `tracks/`
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Base seed for random strategies
    #[arg(short, long)]
    seed: Option<u64>,

    /// Play turns without waiting for Enter
    #[arg(short, long)]
    auto: bool,

    /// Stop each race after this many turns
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u64).range(1..))]
    max_turns: Option<u64>,
}

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let args = Args::parse();
    let config = CliConfig::from_env().with_args(&args);

    let log_file = logging::setup_logging(config.session_id.as_deref())?;
    tracing::debug!(?config, log_file = %log_file.display(), "configuration loaded");

    let console = Console::new(io::BufReader::new(io::stdin()), io::stdout());
    RaceApp::new(config, console).run(args.track.as_deref())
}
