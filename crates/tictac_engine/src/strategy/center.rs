//! Claim the center whenever it is free.

use crate::board::Board;
use crate::types::Coordinate;
use tracing::instrument;

/// Returns the center cell if it is empty.
#[instrument(skip(board))]
pub fn select(board: &Board) -> Option<Coordinate> {
    if !board.is_empty(Board::CENTER) {
        return None;
    }
    board.index_to_row_column(Board::CENTER).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_when_free() {
        assert_eq!(select(&Board::new()), Some(Coordinate::new(1, 1)));
    }

    #[test]
    fn test_declines_when_taken() {
        let board: Board = "... .O. ...".parse().unwrap();
        assert_eq!(select(&board), None);
    }
}
