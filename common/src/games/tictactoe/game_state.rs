use super::board::Board;
use super::types::{GameStatus, Mark, Position};
use super::win_detector::has_three_in_a_row;

/// Whole-game bookkeeping around the board: whose turn it is and whether the
/// game has ended. X always moves first.
#[derive(Debug)]
pub struct TicTacToeGameState {
    pub board: Board,
    pub current_mark: Mark,
    pub status: GameStatus,
    pub last_move: Option<Position>,
}

impl TicTacToeGameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_mark: Mark::X,
            status: GameStatus::InProgress,
            last_move: None,
        }
    }

    /// Places the current player's mark. A rejected move leaves the state
    /// untouched and does not consume the turn.
    pub fn place_mark(&mut self, pos: Position) -> Result<(), String> {
        if self.status != GameStatus::InProgress {
            return Err("Game is already over".to_string());
        }

        if !self.board.contains(pos) {
            return Err("Position out of bounds".to_string());
        }

        if self.board.get(pos) != Mark::Empty {
            return Err("Cell is already marked".to_string());
        }

        self.board.set(pos, self.current_mark);
        self.last_move = Some(pos);

        self.check_game_over();

        if self.status == GameStatus::InProgress {
            self.switch_turn();
        }

        Ok(())
    }

    pub fn winner(&self) -> Option<Mark> {
        match self.status {
            GameStatus::XWon => Some(Mark::X),
            GameStatus::OWon => Some(Mark::O),
            _ => None,
        }
    }

    fn switch_turn(&mut self) {
        self.current_mark = match self.current_mark {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
            Mark::Empty => unreachable!(),
        };
    }

    fn check_game_over(&mut self) {
        // The detector does not say whose line it is; only the mark that just
        // went in can have completed one, so the current player is the winner.
        if has_three_in_a_row(&self.board) {
            self.status = match self.current_mark {
                Mark::X => GameStatus::XWon,
                Mark::O => GameStatus::OWon,
                Mark::Empty => unreachable!(),
            };
            return;
        }

        if self.board.is_full() {
            self.status = GameStatus::Draw;
        }
    }
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(state: &mut TicTacToeGameState, moves: &[(usize, usize)]) {
        for &(row, col) in moves {
            state.place_mark(Position::new(row, col)).unwrap();
        }
    }

    #[test]
    fn test_x_moves_first_and_turns_alternate() {
        let mut state = TicTacToeGameState::new();
        assert_eq!(state.current_mark, Mark::X);

        state.place_mark(Position::new(1, 1)).unwrap();
        assert_eq!(state.current_mark, Mark::O);
        assert_eq!(state.board.get(Position::new(1, 1)), Mark::X);
        assert_eq!(state.last_move, Some(Position::new(1, 1)));

        state.place_mark(Position::new(0, 0)).unwrap();
        assert_eq!(state.current_mark, Mark::X);
        assert_eq!(state.board.get(Position::new(0, 0)), Mark::O);
    }

    #[test]
    fn test_occupied_cell_is_rejected_without_consuming_turn() {
        let mut state = TicTacToeGameState::new();
        state.place_mark(Position::new(0, 0)).unwrap();

        let result = state.place_mark(Position::new(0, 0));
        assert!(result.is_err());
        assert_eq!(state.current_mark, Mark::O);
        assert_eq!(state.board.get(Position::new(0, 0)), Mark::X);
    }

    #[test]
    fn test_out_of_bounds_is_rejected() {
        let mut state = TicTacToeGameState::new();
        assert!(state.place_mark(Position::new(3, 0)).is_err());
        assert!(state.place_mark(Position::new(0, 3)).is_err());
        assert_eq!(state.current_mark, Mark::X);
    }

    #[test]
    fn test_completed_line_wins_for_the_mark_just_placed() {
        let mut state = TicTacToeGameState::new();
        play(
            &mut state,
            &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)],
        );

        assert_eq!(state.status, GameStatus::XWon);
        assert_eq!(state.winner(), Some(Mark::X));
        // The winning side stays recorded as the current mark.
        assert_eq!(state.current_mark, Mark::X);
    }

    #[test]
    fn test_no_moves_accepted_after_game_over() {
        let mut state = TicTacToeGameState::new();
        play(
            &mut state,
            &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)],
        );

        let result = state.place_mark(Position::new(2, 2));
        assert!(result.is_err());
        assert_eq!(state.board.get(Position::new(2, 2)), Mark::Empty);
    }

    #[test]
    fn test_full_board_without_line_is_a_draw() {
        let mut state = TicTacToeGameState::new();
        play(
            &mut state,
            &[
                (0, 0),
                (0, 1),
                (0, 2),
                (1, 1),
                (1, 0),
                (1, 2),
                (2, 1),
                (2, 0),
                (2, 2),
            ],
        );

        assert_eq!(state.status, GameStatus::Draw);
        assert_eq!(state.winner(), None);
    }
}
