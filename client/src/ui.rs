use common::games::tictactoe::{BOARD_SIZE, Board, GameStatus, Mark, Position};

const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;
const ROW_SEPARATOR: &str = "-----------";

/// The banner shown once at startup: the cell numbering the player types in.
pub fn instructions() -> String {
    let mut out = String::new();
    out.push_str("\nChoose a cell numbered from 1 to 9 as below and play\n\n");
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            out.push_str(&format!(" {}", row * BOARD_SIZE + col + 1));
            if col != BOARD_SIZE - 1 {
                out.push_str(" |");
            }
        }
        out.push('\n');
        if row != BOARD_SIZE - 1 {
            out.push_str(ROW_SEPARATOR);
            out.push('\n');
        }
    }
    out.push('\n');
    out
}

pub fn render_board(board: &Board, empty_cell_glyph: char) -> String {
    let mut out = String::new();
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            let glyph = mark_glyph(board.get(Position::new(row, col)), empty_cell_glyph);
            out.push_str(&format!(" {}", glyph));
            if col != BOARD_SIZE - 1 {
                out.push_str(" |");
            }
        }
        out.push('\n');
        if row != BOARD_SIZE - 1 {
            out.push_str(ROW_SEPARATOR);
            out.push('\n');
        }
    }
    out
}

fn mark_glyph(mark: Mark, empty_cell_glyph: char) -> char {
    match mark {
        Mark::Empty => empty_cell_glyph,
        Mark::X => 'X',
        Mark::O => 'O',
    }
}

/// Maps the typed cell number ("1" through "9") to its board position.
pub fn parse_cell_input(input: &str) -> Result<Position, String> {
    let trimmed = input.trim();
    let cell: usize = trimmed
        .parse()
        .map_err(|_| format!("'{}' is not a number", trimmed))?;

    if !(1..=CELL_COUNT).contains(&cell) {
        return Err(format!("Cell must be between 1 and {}", CELL_COUNT));
    }

    Ok(Position::from_index(cell - 1))
}

pub fn outcome_message(status: GameStatus) -> &'static str {
    match status {
        GameStatus::XWon => "You win!",
        GameStatus::OWon => "Computer wins!",
        GameStatus::Draw => "It's a draw!",
        GameStatus::InProgress => "Game still in progress",
    }
}
