//! Text rendering of the board with box-drawing characters.

use tictac_engine::{Board, BoardError, Mark};
use tracing::instrument;

const ROW_SEPARATOR: &str = "═╬═╬═";
const COLUMN_SEPARATOR: char = '║';

/// Character shown for a cell.
pub fn mark_symbol(mark: Mark) -> char {
    match mark {
        Mark::X => 'X',
        Mark::O => 'O',
        Mark::Empty => ' ',
    }
}

/// Draws the board, one line per row with separator lines between rows.
///
/// ```
/// use tictac_engine::Board;
///
/// let board: Board = "X.. .O. ...".parse().unwrap();
/// let text = tictac::render(&board).unwrap();
/// assert_eq!(text.lines().next(), Some("X║ ║ "));
/// ```
#[instrument(skip(board))]
pub fn render(board: &Board) -> Result<String, BoardError> {
    let mut out = String::new();
    for row in 0..board.rows() {
        if row > 0 {
            out.push_str(ROW_SEPARATOR);
            out.push('\n');
        }
        for column in 0..board.columns() {
            if column > 0 {
                out.push(COLUMN_SEPARATOR);
            }
            out.push(mark_symbol(board.get_mark(row, column)?));
        }
        out.push('\n');
    }
    Ok(out)
}
