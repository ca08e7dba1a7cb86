use super::board::Board;
use super::types::{BOARD_SIZE, Mark, Position};

/// True if any of the 8 lines (3 rows, 3 columns, 2 diagonals) holds three
/// identical non-empty marks. Does not report which player or which line:
/// with alternating play only the side that just moved can hold a completed
/// line, so callers derive the winner from the mark they just placed.
pub fn has_three_in_a_row(board: &Board) -> bool {
    check_rows(board) || check_columns(board) || check_diagonals(board)
}

/// A completed line ends the game. A full board without one is a draw, which
/// callers detect separately via `Board::has_empty_cell`.
pub fn is_terminal(board: &Board) -> bool {
    has_three_in_a_row(board)
}

fn check_rows(board: &Board) -> bool {
    for row in 0..BOARD_SIZE {
        let first = board.get(Position::new(row, 0));
        if first != Mark::Empty
            && first == board.get(Position::new(row, 1))
            && first == board.get(Position::new(row, 2))
        {
            return true;
        }
    }
    false
}

fn check_columns(board: &Board) -> bool {
    for col in 0..BOARD_SIZE {
        let first = board.get(Position::new(0, col));
        if first != Mark::Empty
            && first == board.get(Position::new(1, col))
            && first == board.get(Position::new(2, col))
        {
            return true;
        }
    }
    false
}

fn check_diagonals(board: &Board) -> bool {
    let center = board.get(Position::new(1, 1));
    if center == Mark::Empty {
        return false;
    }

    (board.get(Position::new(0, 0)) == center && board.get(Position::new(2, 2)) == center)
        || (board.get(Position::new(0, 2)) == center && board.get(Position::new(2, 0)) == center)
}
