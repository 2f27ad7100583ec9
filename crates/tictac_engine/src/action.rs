//! Accepted moves and the ways a placement can be refused.

use crate::board::BoardError;
use crate::types::{Coordinate, GameStatus, Mark};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a mark placed at a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The mark that was placed.
    pub mark: Mark,
    /// Where it was placed.
    pub coordinate: Coordinate,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.coordinate)
    }
}

/// Error that can occur when requesting or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The target cell already holds a mark.
    #[display("cell {coordinate} is already occupied by {occupant}")]
    CellOccupied {
        /// Requested cell.
        coordinate: Coordinate,
        /// Mark found there.
        occupant: Mark,
    },

    /// The game has already been won or tied.
    #[display("game is already over ({_0})")]
    GameOver(GameStatus),

    /// Row or column outside the board.
    #[display("{_0}")]
    OutOfRange(BoardError),

    /// Every strategy in the seated chain declined.
    #[display("no strategy produced a move for {_0}")]
    Declined(Mark),

    /// A computer move was needed but a person holds the seat.
    #[display("no computer player is seated for {_0}")]
    NoComputerSeated(Mark),
}

impl std::error::Error for MoveError {}

impl From<BoardError> for MoveError {
    fn from(err: BoardError) -> Self {
        MoveError::OutOfRange(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_display() {
        let mov = Move::new(Mark::O, Coordinate::new(0, 2));
        assert_eq!(mov.to_string(), "O -> (0, 2)");
    }

    #[test]
    fn test_board_error_converts() {
        let err: MoveError = BoardError::RowOutOfRange(5).into();
        assert_eq!(err.to_string(), "row 5 is out-of-bounds [0, 3)");
    }

    #[test]
    fn test_occupied_message() {
        let err = MoveError::CellOccupied {
            coordinate: Coordinate::new(1, 1),
            occupant: Mark::X,
        };
        assert_eq!(err.to_string(), "cell (1, 1) is already occupied by X");
    }
}
