//! Layered move selection for computer players.
//!
//! A [`Tier`] is an ordered list of [`Heuristic`]s. Each heuristic either
//! commits to a cell or declines; the first commitment is the move.
//!
//! | Tier       | Chain                                  |
//! |------------|----------------------------------------|
//! | `random`   | random empty cell                      |
//! | `simple`   | win/block, center, random empty cell   |
//! | `advanced` | win/block, frequency, random empty cell|

pub mod center;
pub mod frequency;
pub mod random;
pub mod win_block;

use crate::board::Board;
use crate::types::{Coordinate, Mark};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A single move-selection policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum Heuristic {
    /// Complete our own line, else block the opponent's.
    WinBlock,
    /// Take the center if free.
    Center,
    /// Take the cell on the most live lines.
    Frequency,
    /// Any empty cell.
    RandomEmpty,
}

impl Heuristic {
    /// Asks this policy for a move. `None` means it declines.
    pub fn select<R: Rng + ?Sized>(self, board: &Board, mark: Mark, rng: &mut R) -> Option<Coordinate> {
        match self {
            Heuristic::WinBlock => win_block::select(board, mark),
            Heuristic::Center => center::select(board),
            Heuristic::Frequency => frequency::select(board, mark),
            Heuristic::RandomEmpty => random::select(board, rng),
        }
    }
}

/// Named bundle of heuristics assigned to a computer player.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Tier {
    /// Random empty cell only.
    Random,
    /// Win/block, then center, then random.
    Simple,
    /// Win/block, then line frequency, then random.
    #[default]
    Advanced,
}

impl Tier {
    /// The heuristics this tier consults, in priority order.
    pub fn heuristics(self) -> &'static [Heuristic] {
        match self {
            Tier::Random => &[Heuristic::RandomEmpty],
            Tier::Simple => &[Heuristic::WinBlock, Heuristic::Center, Heuristic::RandomEmpty],
            Tier::Advanced => &[
                Heuristic::WinBlock,
                Heuristic::Frequency,
                Heuristic::RandomEmpty,
            ],
        }
    }
}

/// A tier plus the random source its fallback draws from.
#[derive(Debug, Clone)]
pub struct StrategyChain {
    tier: Tier,
    rng: StdRng,
}

impl StrategyChain {
    /// Creates a chain seeded from the operating system.
    pub fn new(tier: Tier) -> Self {
        Self {
            tier,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates a chain whose random choices replay for the same seed.
    pub fn seeded(tier: Tier, seed: u64) -> Self {
        Self {
            tier,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Returns the tier.
    pub fn tier(&self) -> Tier {
        self.tier
    }

    /// Consults each heuristic in order and returns the first move offered.
    #[instrument(skip(self, board), fields(tier = %self.tier))]
    pub fn select_move(&mut self, board: &Board, mark: Mark) -> Option<Coordinate> {
        for &heuristic in self.tier.heuristics() {
            if let Some(coordinate) = heuristic.select(board, mark, &mut self.rng) {
                debug!(%heuristic, %coordinate, "Heuristic committed");
                return Some(coordinate);
            }
        }
        debug!("Every heuristic declined");
        None
    }
}
