//! Tictac - unified CLI
//!
//! Play in the terminal or run headless tier-vs-tier batches.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tictac::cli::{Cli, Command};
use tictac::{DEFAULT_CONFIG_FILE, PlayerKind, Session, SessionConfig, simulate};
use tictac_engine::Tier;
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            x,
            o,
            games,
            delay_ms,
            seed,
        } => {
            let config = load_config(config.as_deref())?;
            let config = apply_overrides(config, x, o, games, delay_ms, seed);
            config.validate()?;
            run_play(&config)
        }
        Command::Simulate {
            x,
            o,
            games,
            seed,
            json,
        } => run_simulate(x, o, games, seed, json),
    }
}

/// Reads the given config file, or `tictac.toml` when it exists, or defaults.
#[instrument]
fn load_config(path: Option<&Path>) -> Result<SessionConfig> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => {
            let default = PathBuf::from(DEFAULT_CONFIG_FILE);
            if !default.exists() {
                debug!("No config file, using defaults");
                return Ok(SessionConfig::default());
            }
            default
        }
    };
    SessionConfig::from_file(&path)
        .with_context(|| format!("Failed to load config from {}", path.display()))
}

/// Layers command-line flags over file values.
fn apply_overrides(
    mut config: SessionConfig,
    x: Option<PlayerKind>,
    o: Option<PlayerKind>,
    games: Option<u32>,
    delay_ms: Option<u64>,
    seed: Option<u64>,
) -> SessionConfig {
    if let Some(x) = x {
        config = config.with_x(x);
    }
    if let Some(o) = o {
        config = config.with_o(o);
    }
    if let Some(games) = games {
        config = config.with_games(games);
    }
    if let Some(delay_ms) = delay_ms {
        config = config.with_delay_ms(delay_ms);
    }
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    config
}

/// Plays the configured games on stdin/stdout.
#[instrument(skip_all, fields(x = %config.x(), o = %config.o(), games = *config.games()))]
fn run_play(config: &SessionConfig) -> Result<()> {
    info!("Starting session");
    let (seat_x, seat_o) = config.seats();
    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    let mut session = Session::new(seat_x, seat_o, stdin, stdout).with_delay(config.delay());
    session.run(*config.games())?;
    Ok(())
}

/// Runs a headless batch and prints the report.
#[instrument]
fn run_simulate(x: Tier, o: Tier, games: u32, seed: Option<u64>, json: bool) -> Result<()> {
    let report = simulate(x, o, games, seed).context("Simulation failed")?;
    let mut stdout = io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut stdout, &report).context("Failed to write report")?;
        writeln!(stdout)?;
    } else {
        writeln!(stdout, "{report}")?;
    }
    Ok(())
}
