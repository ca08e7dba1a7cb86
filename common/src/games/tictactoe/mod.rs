mod board;
mod bot_controller;
mod game_state;
mod types;
mod win_detector;

pub use board::Board;
pub use bot_controller::find_best_move;
pub use game_state::TicTacToeGameState;
pub use types::{BOARD_SIZE, GameStatus, Mark, Position};
pub use win_detector::{has_three_in_a_row, is_terminal};
