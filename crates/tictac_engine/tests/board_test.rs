//! Tests for board geometry, win detection and the placement asymmetry.

use tictac_engine::{Board, BoardError, Coordinate, GameStatus, Mark, MoveError, Orchestrator, Seat};

#[test]
fn test_index_and_row_column_are_inverses() {
    let board = Board::new();
    for index in 0..board.size() {
        let coordinate = board.index_to_row_column(index).unwrap();
        assert_eq!(
            board.row_column_to_index(coordinate.row, coordinate.column),
            Ok(index)
        );
    }
    for row in 0..board.rows() {
        for column in 0..board.columns() {
            let index = board.row_column_to_index(row, column).unwrap();
            assert_eq!(
                board.index_to_row_column(index),
                Ok(Coordinate::new(row, column))
            );
        }
    }
}

#[test]
fn test_out_of_range_never_wraps() {
    let mut board = Board::new();
    assert_eq!(board.index_to_row_column(9), Err(BoardError::IndexOutOfRange(9)));
    assert_eq!(
        board.index_to_row_column(usize::MAX),
        Err(BoardError::IndexOutOfRange(usize::MAX))
    );
    assert_eq!(board.set_mark(0, 3, Mark::X), Err(BoardError::ColumnOutOfRange(3)));
    assert_eq!(board.get_mark(3, 3), Err(BoardError::RowOutOfRange(3)));
    assert_eq!(board, Board::new());
}

#[test]
fn test_board_overwrites_but_orchestrator_refuses() {
    // Board::set_mark never refuses a cell and reports what it replaced.
    let mut board = Board::new();
    assert_eq!(board.set_mark(0, 0, Mark::X), Ok(Mark::Empty));
    assert_eq!(board.set_mark(0, 0, Mark::O), Ok(Mark::X));

    // The orchestrator is the layer that insists on empty cells.
    let mut game = Orchestrator::new(Seat::Human, Seat::Human);
    assert_eq!(game.place_mark(0, 0), Ok(Mark::X));
    assert!(matches!(
        game.place_mark(0, 0),
        Err(MoveError::CellOccupied { occupant: Mark::X, .. })
    ));
    assert_eq!(game.board().get_mark(0, 0), Ok(Mark::X));
}

#[test]
fn test_every_line_wins() {
    for line in tictac_engine::lines::winning_lines() {
        let mut board = Board::new();
        for &index in line {
            let Coordinate { row, column } = board.index_to_row_column(index).unwrap();
            board.set_mark(row, column, Mark::O).unwrap();
        }
        assert_eq!(board.winner(), GameStatus::Won(Mark::O), "line {line:?}");
    }
}

#[test]
fn test_is_full_and_clear() {
    let mut board: Board = "XOX XOO OXX".parse().unwrap();
    assert!(board.is_full());
    assert_eq!(board.winner(), GameStatus::Tie);
    board.clear();
    assert!(!board.is_full());
    assert_eq!(board.winner(), GameStatus::Undetermined);
}

#[test]
fn test_decided_result_is_stable() {
    let mut game = Orchestrator::new(Seat::Human, Seat::Human);
    for (row, column) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
        game.place_mark(row, column).unwrap();
    }
    assert_eq!(game.status(), GameStatus::Won(Mark::X));

    // No further placement is accepted, so the result cannot change.
    assert_eq!(
        game.place_mark(2, 2),
        Err(MoveError::GameOver(GameStatus::Won(Mark::X)))
    );
    assert_eq!(game.status(), GameStatus::Won(Mark::X));
    assert_eq!(game.history().len(), 5);
}

#[test]
fn test_board_serializes() {
    let board: Board = "X.. .O. ...".parse().unwrap();
    let json = serde_json::to_string(&board).unwrap();
    let back: Board = serde_json::from_str(&json).unwrap();
    assert_eq!(back, board);
}
