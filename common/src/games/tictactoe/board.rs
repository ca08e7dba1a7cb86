use super::types::{BOARD_SIZE, Mark, Position};

/// Owned fixed 3x3 grid. Cells are addressed by (row, col), each in [0, 2];
/// whenever cells are enumerated, the order is row-major (row 0→2, col 0→2).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [[Mark; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[Mark::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Builds a board from 9 marks given in row-major order.
    pub fn from_marks(marks: &[Mark; BOARD_SIZE * BOARD_SIZE]) -> Self {
        let mut board = Self::new();
        for (index, &mark) in marks.iter().enumerate() {
            board.set(Position::from_index(index), mark);
        }
        board
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row < BOARD_SIZE && pos.col < BOARD_SIZE
    }

    pub fn get(&self, pos: Position) -> Mark {
        self.cells[pos.row][pos.col]
    }

    pub fn set(&mut self, pos: Position, mark: Mark) {
        self.cells[pos.row][pos.col] = mark;
    }

    /// Empty cells in row-major order.
    pub fn available_moves(&self) -> Vec<Position> {
        let mut moves = Vec::new();
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                if cell == Mark::Empty {
                    moves.push(Position::new(row, col));
                }
            }
        }
        moves
    }

    pub fn has_empty_cell(&self) -> bool {
        self.cells
            .iter()
            .any(|row| row.iter().any(|&cell| cell == Mark::Empty))
    }

    pub fn is_full(&self) -> bool {
        !self.has_empty_cell()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
