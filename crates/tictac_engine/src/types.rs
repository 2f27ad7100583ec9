//! Core domain types for tic-tac-toe.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Contents of a single cell, doubling as the identity of a player.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, strum::EnumIter,
)]
pub enum Mark {
    /// Unclaimed cell.
    #[default]
    Empty,
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Mark {
    /// Returns the opposing mark. `Empty` has no opponent and maps to itself.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
            Mark::Empty => Mark::Empty,
        }
    }

    /// True for `X` and `O`.
    pub fn is_player(self) -> bool {
        self != Mark::Empty
    }
}

/// A cell addressed by zero-based row and column.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, derive_new::new,
)]
#[display("({row}, {column})")]
pub struct Coordinate {
    /// Row, top to bottom.
    pub row: usize,
    /// Column, left to right.
    pub column: usize,
}

/// Result of scanning the board for a winner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum GameStatus {
    /// No line is complete and empty cells remain.
    #[display("undetermined")]
    Undetermined,
    /// A player completed a line.
    #[display("{_0} wins")]
    Won(Mark),
    /// Board is full with no completed line.
    #[display("tie")]
    Tie,
}

impl GameStatus {
    /// True once the game has been won or tied.
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::Undetermined)
    }

    /// Returns the winning mark, if any.
    pub fn winner(self) -> Option<Mark> {
        match self {
            GameStatus::Won(mark) => Some(mark),
            _ => None,
        }
    }
}
