//! Command-line interface for tictac.

use crate::config::PlayerKind;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictac_engine::Tier;

/// Tictac - tic-tac-toe for people and heuristic computer players
#[derive(Parser, Debug)]
#[command(name = "tictac")]
#[command(about = "Tic-tac-toe between any mix of humans and computer tiers", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play or watch games in the terminal
    Play {
        /// Session config file (defaults to ./tictac.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Player for X: human, random, simple or advanced
        #[arg(long)]
        x: Option<PlayerKind>,

        /// Player for O: human, random, simple or advanced
        #[arg(long)]
        o: Option<PlayerKind>,

        /// Number of games
        #[arg(short, long)]
        games: Option<u32>,

        /// Pause between computer-only games, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Seed for reproducible computer play
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Run computer-vs-computer games headlessly and report the tally
    Simulate {
        /// Tier playing X
        #[arg(long)]
        x: Tier,

        /// Tier playing O
        #[arg(long)]
        o: Tier,

        /// Number of games
        #[arg(short, long, default_value = "1000")]
        games: u32,

        /// Seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_flags() {
        let cli = Cli::try_parse_from(["tictac", "play", "--x", "simple", "--games", "3"]).unwrap();
        match cli.command {
            Command::Play { x, o, games, .. } => {
                assert_eq!(x, Some(PlayerKind::Simple));
                assert_eq!(o, None);
                assert_eq!(games, Some(3));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_simulate_flags() {
        let cli = Cli::try_parse_from([
            "tictac", "simulate", "--x", "advanced", "--o", "random", "--json",
        ])
        .unwrap();
        match cli.command {
            Command::Simulate { x, o, games, json, seed } => {
                assert_eq!(x, Tier::Advanced);
                assert_eq!(o, Tier::Random);
                assert_eq!(games, 1000);
                assert!(json);
                assert_eq!(seed, None);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_rejects_unknown_tier() {
        assert!(Cli::try_parse_from(["tictac", "simulate", "--x", "perfect", "--o", "random"]).is_err());
    }
}
