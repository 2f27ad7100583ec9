//! Static line tables shared by win detection and the heuristics.
//!
//! Indices are linear, row-major, `0..9`. Both tables are plain constants:
//! nothing writes to them, so every consumer reads them without
//! coordination.

/// Three linear indices forming a row, column or diagonal.
pub type Line = [usize; 3];

/// The eight three-in-a-row conditions, in scan order.
///
/// Order matters: [`crate::Board::winner`] reports the first complete line
/// and the frequency heuristic breaks ties by the order lines are visited.
pub const WINNING_LINES: [Line; 8] = [
    [0, 1, 2], // top row
    [3, 4, 5], // middle row
    [6, 7, 8], // bottom row
    [0, 3, 6], // left column
    [1, 4, 7], // middle column
    [2, 5, 8], // right column
    [0, 4, 8], // left diagonal
    [2, 4, 6], // right diagonal
];

/// Every ordering of every line, sorted lexicographically.
///
/// The first two entries are the cells that must already share a mark; the
/// third is the cell to claim. Win/block detection takes the first template
/// that matches, so this order is its tie-break.
pub const MOVE_TEMPLATES: [Line; 48] = [
    [0, 1, 2],
    [0, 2, 1],
    [0, 3, 6],
    [0, 4, 8],
    [0, 6, 3],
    [0, 8, 4],
    [1, 0, 2],
    [1, 2, 0],
    [1, 4, 7],
    [1, 7, 4],
    [2, 0, 1],
    [2, 1, 0],
    [2, 4, 6],
    [2, 5, 8],
    [2, 6, 4],
    [2, 8, 5],
    [3, 0, 6],
    [3, 4, 5],
    [3, 5, 4],
    [3, 6, 0],
    [4, 0, 8],
    [4, 1, 7],
    [4, 2, 6],
    [4, 3, 5],
    [4, 5, 3],
    [4, 6, 2],
    [4, 7, 1],
    [4, 8, 0],
    [5, 2, 8],
    [5, 3, 4],
    [5, 4, 3],
    [5, 8, 2],
    [6, 0, 3],
    [6, 2, 4],
    [6, 3, 0],
    [6, 4, 2],
    [6, 7, 8],
    [6, 8, 7],
    [7, 1, 4],
    [7, 4, 1],
    [7, 6, 8],
    [7, 8, 6],
    [8, 0, 4],
    [8, 2, 5],
    [8, 4, 0],
    [8, 5, 2],
    [8, 6, 7],
    [8, 7, 6],
];

/// Returns the eight winning lines.
pub fn winning_lines() -> &'static [Line] {
    &WINNING_LINES
}

/// Returns the 48 ordered move templates.
pub fn move_templates() -> &'static [Line] {
    &MOVE_TEMPLATES
}
