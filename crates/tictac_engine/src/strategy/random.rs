//! Last resort: any empty cell, chosen at random.

use crate::board::Board;
use crate::types::Coordinate;
use rand::Rng;
use rand::seq::IteratorRandom;
use tracing::instrument;

/// Picks uniformly among the empty cells. `None` only on a full board.
#[instrument(skip(board, rng))]
pub fn select<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Coordinate> {
    let index = board.empty_cells().choose(rng)?;
    board.index_to_row_column(index).ok()
}
