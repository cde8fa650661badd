//! Terminal front end for exercising a time-of-day value
//!
//! Reads one-character commands from standard input, or replays them from a
//! fixture file, and prints the resulting time after every command.

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;
use std::fs::File;
use std::io::{self, BufReader, IsTerminal};
use std::path::PathBuf;
use timeofday_core::config::{ClockConfig, ConfigLoader, DEFAULT_CONFIG_FILE};
use timeofday_core::session::Session;

#[derive(Parser, Debug)]
#[clap(name = "timeofday", author, version, about = "Interactive time-of-day exerciser")]
struct Cli {
    #[clap(
        long,
        short,
        help = "Configuration file (defaults to ./timeofday.yaml when present)"
    )]
    config: Option<PathBuf>,

    #[clap(long, short, help = "Replay commands from this file instead of standard input")]
    fixture: Option<PathBuf>,

    #[clap(long, short, help = "Log level filter (overrides the configuration file)")]
    log_level: Option<String>,

    #[clap(long, help = "Write logs to this file instead of standard error")]
    log_file: Option<PathBuf>,

    #[clap(long, help = "Start in 12-hour (AM/PM) mode")]
    twelve_hour: bool,

    #[clap(long, help = "Show prompts even when replaying a fixture")]
    interactive: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // The logger level can come from the configuration, so the loader runs
    // before any logger is installed and its own log lines are dropped.
    // Failures still surface through the returned error.
    let mut config = match &cli.config {
        Some(path) => ConfigLoader::from_file(path)
            .await
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => ConfigLoader::from_file_or_default(DEFAULT_CONFIG_FILE).await?,
    };

    init_logger(&cli, &config)?;
    log::debug!("Effective configuration: {:?}", config);

    if cli.twelve_hour {
        config.clock.mode_24_hour = false;
    }
    if cli.interactive {
        config.session.interactive = Some(true);
    }

    let stdout = io::stdout();
    let output = stdout.lock();

    let summary = match &cli.fixture {
        Some(path) => {
            log::info!("Replaying commands from fixture: {}", path.display());
            let file = File::open(path)
                .with_context(|| format!("Failed to open fixture {}", path.display()))?;
            let mut session = Session::from_config(BufReader::new(file), output, &config, false)?;
            session.run()?
        }
        None => {
            let stdin = io::stdin();
            let interactive = stdin.is_terminal();
            let mut session = Session::from_config(stdin.lock(), output, &config, interactive)?;
            session.run()?
        }
    };

    log::debug!("Session summary: {:?}", summary);
    Ok(())
}

fn init_logger(cli: &Cli, config: &ClockConfig) -> Result<()> {
    let level_filter = match &cli.log_level {
        Some(level) => level.parse().unwrap_or(LevelFilter::Info),
        None => config.logging.level_filter()?,
    };

    let mut builder = env_logger::Builder::new();
    builder.filter_level(level_filter);

    if let Some(path) = &cli.log_file {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(log_file)));
    }

    builder.init();
    Ok(())
}
