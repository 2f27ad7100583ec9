//! Turn ownership: who moves next, and applying their move to the board.

use crate::action::{Move, MoveError};
use crate::board::Board;
use crate::invariants::{InvariantSet, TurnInvariants};
use crate::strategy::{StrategyChain, Tier};
use crate::types::{Coordinate, GameStatus, Mark};
use tracing::{debug, info, instrument, warn};

/// Who plays a mark.
#[derive(Debug, Clone)]
pub enum Seat {
    /// A person; moves arrive from outside the engine.
    Human,
    /// A computer player driven by a strategy chain.
    Computer(StrategyChain),
}

impl Seat {
    /// Computer seat for `tier`, seeded from the operating system.
    pub fn computer(tier: Tier) -> Self {
        Seat::Computer(StrategyChain::new(tier))
    }

    /// Computer seat whose random fallback replays for the same seed.
    pub fn seeded(tier: Tier, seed: u64) -> Self {
        Seat::Computer(StrategyChain::seeded(tier, seed))
    }

    /// True for a person.
    pub fn is_human(&self) -> bool {
        matches!(self, Seat::Human)
    }

    /// The computer's tier, if any.
    pub fn tier(&self) -> Option<Tier> {
        match self {
            Seat::Human => None,
            Seat::Computer(chain) => Some(chain.tier()),
        }
    }
}

/// Answer to [`Orchestrator::request_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveRequest {
    /// The seated strategy chose this cell.
    Selected(Coordinate),
    /// The seated strategy had nothing to offer (only on a full board).
    Declined,
    /// No computer player holds this seat; ask a person.
    Unassigned,
}

/// Board, turn and seats for one game at a time.
#[derive(Debug, Clone)]
pub struct Orchestrator {
    board: Board,
    turn: Mark,
    seat_x: Seat,
    seat_o: Seat,
    history: Vec<Move>,
}

impl Orchestrator {
    /// Mark that opens every game.
    pub const FIRST: Mark = Mark::X;

    /// Creates an orchestrator with an empty board and X to move.
    #[instrument]
    pub fn new(seat_x: Seat, seat_o: Seat) -> Self {
        Self {
            board: Board::new(),
            turn: Self::FIRST,
            seat_x,
            seat_o,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark to move.
    pub fn turn(&self) -> Mark {
        self.turn
    }

    /// Returns the accepted moves, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns who plays `mark`. `Empty` has no seat.
    pub fn seat(&self, mark: Mark) -> Option<&Seat> {
        match mark {
            Mark::X => Some(&self.seat_x),
            Mark::O => Some(&self.seat_o),
            Mark::Empty => None,
        }
    }

    /// Current result of the board.
    pub fn status(&self) -> GameStatus {
        self.board.winner()
    }

    /// Clears the board and history and hands the turn back to X.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.clear();
        self.history.clear();
        self.turn = Self::FIRST;
        info!("New game");
    }

    /// Asks the seat holding the current turn for a move.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn request_move(&mut self) -> MoveRequest {
        let seat = match self.turn {
            Mark::X => &mut self.seat_x,
            Mark::O => &mut self.seat_o,
            Mark::Empty => return MoveRequest::Unassigned,
        };
        match seat {
            Seat::Human => MoveRequest::Unassigned,
            Seat::Computer(chain) => match chain.select_move(&self.board, self.turn) {
                Some(coordinate) => MoveRequest::Selected(coordinate),
                None => MoveRequest::Declined,
            },
        }
    }

    /// Places the current turn's mark on an empty cell and passes the turn.
    ///
    /// Returns the mark that was placed.
    ///
    /// # Errors
    ///
    /// `OutOfRange` for coordinates off the board, `CellOccupied` when the
    /// cell already holds a mark, `GameOver` once the board is decided.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn place_mark(&mut self, row: usize, column: usize) -> Result<Mark, MoveError> {
        let status = self.status();
        if status.is_over() {
            warn!(%status, "Placement after game end");
            return Err(MoveError::GameOver(status));
        }

        let occupant = self.board.get_mark(row, column)?;
        if occupant != Mark::Empty {
            let coordinate = Coordinate::new(row, column);
            warn!(%coordinate, %occupant, "Placement on occupied cell");
            return Err(MoveError::CellOccupied {
                coordinate,
                occupant,
            });
        }

        let placed = self.turn;
        self.board.set_mark(row, column, placed)?;
        self.history.push(Move::new(placed, Coordinate::new(row, column)));
        self.turn = placed.opponent();
        debug!(%placed, row, column, "Mark placed");

        debug_assert!(
            TurnInvariants::check_all(self).is_ok(),
            "turn invariants violated after {placed} at ({row}, {column})"
        );

        Ok(placed)
    }

    /// Plays computer moves until the game is decided.
    ///
    /// # Errors
    ///
    /// `NoComputerSeated` when a human holds the turn; `Declined` if a
    /// chain gives up on an undecided board.
    #[instrument(skip(self))]
    pub fn play_out(&mut self) -> Result<GameStatus, MoveError> {
        loop {
            let status = self.status();
            if status.is_over() {
                info!(%status, moves = self.history.len(), "Game over");
                return Ok(status);
            }
            match self.request_move() {
                MoveRequest::Selected(Coordinate { row, column }) => {
                    self.place_mark(row, column)?;
                }
                MoveRequest::Declined => return Err(MoveError::Declined(self.turn)),
                MoveRequest::Unassigned => return Err(MoveError::NoComputerSeated(self.turn)),
            }
        }
    }
}
