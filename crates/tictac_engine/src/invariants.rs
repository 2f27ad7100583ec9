//! Properties every orchestrator state must satisfy.
//!
//! Checked after each accepted placement in debug builds and available to
//! tests through [`InvariantSet::check_all`].

use crate::orchestrator::Orchestrator;
use crate::types::Mark;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{description}")]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

/// A set of invariants checked together.
pub trait InvariantSet<S> {
    /// Returns every violated invariant, or `Ok` if all hold.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
        ]
        .into_iter()
        .filter(|(held, _)| !held)
        .map(|(_, description)| InvariantViolation {
            description: description.to_string(),
        })
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Moves alternate X, O, X, ... and the turn field agrees with the history.
pub struct AlternatingTurn;

impl Invariant<Orchestrator> for AlternatingTurn {
    fn holds(game: &Orchestrator) -> bool {
        let history = game.history();

        if let Some(first) = history.first()
            && first.mark != Orchestrator::FIRST
        {
            return false;
        }

        if history.windows(2).any(|pair| pair[0].mark == pair[1].mark) {
            return false;
        }

        let expected = match history.last() {
            Some(last) => last.mark.opponent(),
            None => Orchestrator::FIRST,
        };
        game.turn() == expected
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

/// Every marked cell is explained by exactly one history entry.
pub struct HistoryMatchesBoard;

impl Invariant<Orchestrator> for HistoryMatchesBoard {
    fn holds(game: &Orchestrator) -> bool {
        let board = game.board();
        let mut replayed = [Mark::Empty; crate::Board::SIZE];

        for mov in game.history() {
            let Ok(index) = board.row_column_to_index(mov.coordinate.row, mov.coordinate.column)
            else {
                return false;
            };
            if replayed[index] != Mark::Empty {
                return false;
            }
            replayed[index] = mov.mark;
        }

        &replayed == board.cells()
    }

    fn description() -> &'static str {
        "Move history reproduces the board"
    }
}

/// The invariants enforced on every placement.
pub type TurnInvariants = (AlternatingTurn, HistoryMatchesBoard);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orchestrator::Seat;

    #[test]
    fn test_fresh_game_holds() {
        let game = Orchestrator::new(Seat::Human, Seat::Human);
        assert!(TurnInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_holds_through_a_game() {
        let mut game = Orchestrator::new(Seat::Human, Seat::Human);
        for (row, column) in [(0, 0), (1, 1), (0, 1), (2, 2)] {
            game.place_mark(row, column).unwrap();
            assert!(AlternatingTurn::holds(&game));
            assert!(HistoryMatchesBoard::holds(&game));
        }
    }

    #[test]
    fn test_rejected_moves_leave_invariants_intact() {
        let mut game = Orchestrator::new(Seat::Human, Seat::Human);
        game.place_mark(0, 0).unwrap();
        assert!(game.place_mark(0, 0).is_err());
        assert!(TurnInvariants::check_all(&game).is_ok());
    }
}
