use super::board::Board;
use super::types::{Mark, Position};
use super::win_detector::has_three_in_a_row;

const WIN_SCORE: i32 = 10;
const LOSS_SCORE: i32 = -10;

/// Finds the strongest cell for `bot_mark`, assuming the opponent replies
/// optimally from then on. Candidates are tried in row-major order and only a
/// strictly better score replaces the current best, so ties keep the earliest
/// cell and the result is deterministic. Returns `None` on a full board.
///
/// The board is mutated during the search but is restored to its exact input
/// state before returning.
pub fn find_best_move(board: &mut Board, bot_mark: Mark) -> Option<Position> {
    let mut best_score = i32::MIN;
    let mut best_move = None;

    for pos in board.available_moves() {
        board.set(pos, bot_mark);
        let score = minimax(board, bot_mark, 0, false);
        board.set(pos, Mark::Empty);

        if score > best_score {
            best_score = score;
            best_move = Some(pos);
        }
    }

    best_move
}

/// Exhaustive game-tree value of `board` for `bot_mark`; `is_bot_turn` names
/// the side about to move. No pruning and no depth limit beyond the 9 cells.
/// `depth` is threaded through the recursion but never enters the score, so
/// a win in four moves is worth the same as a win now.
fn minimax(board: &mut Board, bot_mark: Mark, depth: u32, is_bot_turn: bool) -> i32 {
    // A completed line always belongs to the side that just moved, never to
    // the side to move, so the turn flag alone identifies the winner.
    if has_three_in_a_row(board) {
        return if is_bot_turn { LOSS_SCORE } else { WIN_SCORE };
    }

    if !board.has_empty_cell() {
        return 0;
    }

    let moving_mark = if is_bot_turn {
        bot_mark
    } else {
        bot_mark.opponent().unwrap()
    };

    let mut best = if is_bot_turn { i32::MIN } else { i32::MAX };

    for pos in board.available_moves() {
        board.set(pos, moving_mark);
        let score = minimax(board, bot_mark, depth + 1, !is_bot_turn);
        board.set(pos, Mark::Empty);

        if is_bot_turn {
            best = best.max(score);
        } else {
            best = best.min(score);
        }
    }

    best
}
