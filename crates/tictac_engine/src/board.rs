//! The 3x3 grid and its coordinate mapping.

use crate::lines::winning_lines;
use crate::types::{Coordinate, GameStatus, Mark};
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// A row, column or linear index outside the 3x3 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// Row not in `0..3`.
    #[display("row {_0} is out-of-bounds [0, 3)")]
    RowOutOfRange(usize),
    /// Column not in `0..3`.
    #[display("column {_0} is out-of-bounds [0, 3)")]
    ColumnOutOfRange(usize),
    /// Linear index not in `0..9`.
    #[display("index {_0} is out-of-bounds [0, 9)")]
    IndexOutOfRange(usize),
}

impl std::error::Error for BoardError {}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Mark; Board::SIZE],
}

impl Board {
    /// Number of rows.
    pub const ROWS: usize = 3;
    /// Number of columns.
    pub const COLUMNS: usize = 3;
    /// Number of cells.
    pub const SIZE: usize = Self::ROWS * Self::COLUMNS;
    /// Linear index of the center cell.
    pub const CENTER: usize = 4;

    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; Self::SIZE],
        }
    }

    /// Number of cells (always 9).
    pub fn size(&self) -> usize {
        Self::SIZE
    }

    /// Number of rows (always 3).
    pub fn rows(&self) -> usize {
        Self::ROWS
    }

    /// Number of columns (always 3).
    pub fn columns(&self) -> usize {
        Self::COLUMNS
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Mark; Board::SIZE] {
        &self.cells
    }

    /// Converts a linear index to its row and column.
    pub fn index_to_row_column(&self, index: usize) -> Result<Coordinate, BoardError> {
        if index >= Self::SIZE {
            return Err(BoardError::IndexOutOfRange(index));
        }
        Ok(Coordinate::new(index / Self::COLUMNS, index % Self::COLUMNS))
    }

    /// Converts a row and column to a linear index.
    pub fn row_column_to_index(&self, row: usize, column: usize) -> Result<usize, BoardError> {
        if row >= Self::ROWS {
            return Err(BoardError::RowOutOfRange(row));
        }
        if column >= Self::COLUMNS {
            return Err(BoardError::ColumnOutOfRange(column));
        }
        Ok(row * Self::COLUMNS + column)
    }

    /// Reads the mark at a cell.
    pub fn get_mark(&self, row: usize, column: usize) -> Result<Mark, BoardError> {
        let index = self.row_column_to_index(row, column)?;
        Ok(self.cells[index])
    }

    /// Writes a mark unconditionally, returning the mark it replaced.
    ///
    /// The board does not refuse occupied cells; callers that must only
    /// fill empty cells go through [`crate::Orchestrator::place_mark`].
    #[instrument(skip(self))]
    pub fn set_mark(&mut self, row: usize, column: usize, mark: Mark) -> Result<Mark, BoardError> {
        let index = self.row_column_to_index(row, column)?;
        let previous = std::mem::replace(&mut self.cells[index], mark);
        trace!(%mark, %previous, row, column, "Cell marked");
        Ok(previous)
    }

    /// Checks if a cell is empty. Out-of-range indices are never empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.cells.get(index), Some(Mark::Empty))
    }

    /// Linear indices of every empty cell, ascending.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        (0..Self::SIZE).filter(|&index| self.cells[index] == Mark::Empty)
    }

    /// True when no cell is empty.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&mark| mark != Mark::Empty)
    }

    /// Resets every cell to empty.
    #[instrument(skip(self))]
    pub fn clear(&mut self) {
        self.cells = [Mark::Empty; Self::SIZE];
    }

    /// Scans the lines in table order for a winner.
    ///
    /// Returns the first complete line's mark, otherwise `Tie` on a full
    /// board, otherwise `Undetermined`.
    #[instrument(skip(self))]
    pub fn winner(&self) -> GameStatus {
        for &[a, b, c] in winning_lines() {
            let mark = self.cells[a];
            if mark.is_player() && mark == self.cells[b] && mark == self.cells[c] {
                return GameStatus::Won(mark);
            }
        }

        if self.is_full() {
            GameStatus::Tie
        } else {
            GameStatus::Undetermined
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::str::FromStr for Board {
    type Err = BoardError;

    /// Parses nine cells row-major: `X`, `O`, anything else is empty.
    /// Whitespace and `|` separate cells and are skipped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Board::new();
        let mut index = 0;
        for ch in s.chars().filter(|ch| !(ch.is_whitespace() || *ch == '|')) {
            let mark = match ch.to_ascii_uppercase() {
                'X' => Mark::X,
                'O' => Mark::O,
                _ => Mark::Empty,
            };
            match board.cells.get_mut(index) {
                Some(cell) => *cell = mark,
                None => return Err(BoardError::IndexOutOfRange(index)),
            }
            index += 1;
        }
        if index != Self::SIZE {
            return Err(BoardError::IndexOutOfRange(index));
        }
        Ok(board)
    }
}
