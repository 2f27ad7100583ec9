//! Complete a line of our own, else spoil the opponent's.

use crate::board::Board;
use crate::lines::move_templates;
use crate::types::{Coordinate, Mark};
use tracing::{debug, instrument};

/// First template where `mark` holds both lead cells and the target is empty.
///
/// Returns the target's linear index.
pub fn completing_cell(board: &Board, mark: Mark) -> Option<usize> {
    let cells = board.cells();
    move_templates()
        .iter()
        .find(|&&[first, second, target]| {
            cells[first] == mark && cells[second] == mark && cells[target] == Mark::Empty
        })
        .map(|&[_, _, target]| target)
}

/// Takes an immediate win for `mark`, otherwise blocks the opponent's.
#[instrument(skip(board))]
pub fn select(board: &Board, mark: Mark) -> Option<Coordinate> {
    let index = match completing_cell(board, mark) {
        Some(index) => {
            debug!(index, "Winning move available");
            index
        }
        None => {
            let index = completing_cell(board, mark.opponent())?;
            debug!(index, "Blocking opponent");
            index
        }
    };
    board.index_to_row_column(index).ok()
}
