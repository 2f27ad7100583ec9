//! Running score across games.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use tictac_engine::{GameStatus, Mark};
use tracing::info;

/// Wins per mark and ties.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display)]
#[display("X: {x}, O: {o}, Tie: {ties}")]
pub struct Tally {
    /// Games won by X.
    pub x: u32,
    /// Games won by O.
    pub o: u32,
    /// Tied games.
    pub ties: u32,
}

impl Tally {
    /// Counts a finished game. Undecided results are ignored.
    pub fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::Won(Mark::X) => self.x += 1,
            GameStatus::Won(Mark::O) => self.o += 1,
            GameStatus::Tie => self.ties += 1,
            GameStatus::Won(Mark::Empty) | GameStatus::Undetermined => return,
        }
        info!(tally = %self, "Tally updated");
    }

    /// Total games counted.
    pub fn games(&self) -> u32 {
        self.x + self.o + self.ties
    }

    /// Wins for `mark`; zero for `Empty`.
    pub fn wins(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x,
            Mark::O => self.o,
            Mark::Empty => 0,
        }
    }
}
