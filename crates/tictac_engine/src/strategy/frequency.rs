//! Prefer the empty cell that sits on the most still-winnable lines.
//!
//! A line is live for the mover when it holds none of the opponent's marks.
//! Each live line adds one to every cell on it for having an open cell,
//! and one more for already holding one of the mover's marks. After each
//! live line is added, the cells are rescanned in index order and the best
//! empty cell is replaced only by a strictly greater count, so ties go to
//! whichever cell reached the maximum first in line-table order.

use crate::board::Board;
use crate::lines::winning_lines;
use crate::types::{Coordinate, Mark};
use tracing::{debug, instrument};

/// Per-cell weights, indexed linearly.
pub type Weights = [u32; Board::SIZE];

/// Runs the live-line count and returns the chosen index with the weights.
pub fn best_cell(board: &Board, mark: Mark) -> (Option<usize>, Weights) {
    let cells = board.cells();
    let mut weights: Weights = [0; Board::SIZE];
    let mut best: Option<usize> = None;

    for line in winning_lines() {
        let mut has_open = false;
        let mut has_own = false;
        for &index in line {
            match cells[index] {
                Mark::Empty => has_open = true,
                held if held == mark => has_own = true,
                _ => {
                    has_open = false;
                    has_own = false;
                    break;
                }
            }
        }

        if !(has_open || has_own) {
            continue;
        }

        let bonus = u32::from(has_open) + u32::from(has_own);
        for &index in line {
            weights[index] += bonus;
        }

        for index in 0..Board::SIZE {
            let leading = best.map_or(0, |b| weights[b]);
            if weights[index] > leading && cells[index] == Mark::Empty {
                best = Some(index);
            }
        }
    }

    (best, weights)
}

/// Picks the empty cell with the highest live-line weight, if any is positive.
#[instrument(skip(board))]
pub fn select(board: &Board, mark: Mark) -> Option<Coordinate> {
    let (best, weights) = best_cell(board, mark);
    debug!(?weights, ?best, "Line frequency weights");
    board.index_to_row_column(best?).ok()
}
