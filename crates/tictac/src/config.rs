//! Session configuration: who sits in each seat and how many games to play.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tictac_engine::{Mark, Seat, Tier};
use tracing::{debug, info, instrument};

/// File name looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "tictac.toml";

/// Who plays a mark: a person or one of the computer tiers.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum PlayerKind {
    /// Moves typed at the keyboard.
    Human,
    /// Random empty cell.
    Random,
    /// Win/block, center, random.
    Simple,
    /// Win/block, line frequency, random.
    Advanced,
}

impl PlayerKind {
    /// The computer tier, or `None` for a person.
    pub fn tier(self) -> Option<Tier> {
        match self {
            PlayerKind::Human => None,
            PlayerKind::Random => Some(Tier::Random),
            PlayerKind::Simple => Some(Tier::Simple),
            PlayerKind::Advanced => Some(Tier::Advanced),
        }
    }

    /// Builds the seat, seeding the computer's random source when asked.
    #[instrument]
    pub fn seat(self, seed: Option<u64>) -> Seat {
        match (self.tier(), seed) {
            (None, _) => Seat::Human,
            (Some(tier), Some(seed)) => Seat::seeded(tier, seed),
            (Some(tier), None) => Seat::computer(tier),
        }
    }
}

/// Derives a per-seat seed so both computers do not replay the same draws.
pub fn seat_seed(seed: Option<u64>, mark: Mark) -> Option<u64> {
    seed.map(|seed| match mark {
        Mark::O => seed ^ 0x9e37_79b9_7f4a_7c15,
        _ => seed,
    })
}

/// Configuration for a run of games.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct SessionConfig {
    /// Player for X (moves first).
    #[serde(default = "default_x")]
    x: PlayerKind,

    /// Player for O.
    #[serde(default = "default_o")]
    o: PlayerKind,

    /// Number of games to play.
    #[serde(default = "default_games")]
    games: u32,

    /// Pause between games when nobody is at the keyboard, in milliseconds.
    #[serde(default = "default_delay_ms")]
    delay_ms: u64,

    /// Seed for reproducible computer play.
    #[serde(default)]
    #[setters(strip_option)]
    seed: Option<u64>,
}

fn default_x() -> PlayerKind {
    PlayerKind::Human
}

fn default_o() -> PlayerKind {
    PlayerKind::Advanced
}

fn default_games() -> u32 {
    1
}

fn default_delay_ms() -> u64 {
    1000
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            x: default_x(),
            o: default_o(),
            games: default_games(),
            delay_ms: default_delay_ms(),
            seed: None,
        }
    }
}

impl SessionConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(x = %config.x, o = %config.o, games = config.games, "Config loaded successfully");
        Ok(config)
    }

    /// Parses and validates configuration text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects settings that cannot run.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.games == 0 {
            return Err(ConfigError::new("games must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Pause between games.
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    /// True if either seat is played from the keyboard.
    pub fn has_human(&self) -> bool {
        self.x == PlayerKind::Human || self.o == PlayerKind::Human
    }

    /// Builds both seats, X first.
    pub fn seats(&self) -> (Seat, Seat) {
        (
            self.x.seat(seat_seed(self.seed, Mark::X)),
            self.o.seat(seat_seed(self.seed, Mark::O)),
        )
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
