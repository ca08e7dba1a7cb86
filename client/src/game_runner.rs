use std::io::{self, BufRead, Write};

use common::games::tictactoe::{GameStatus, Mark, TicTacToeGameState, find_best_move};
use common::log;

use crate::config::ClientConfig;
use crate::ui;

/// Runs one interactive game on stdin/stdout. Human plays X and moves first;
/// the computer answers with the minimax bot as O.
pub fn run_game(config: &ClientConfig) -> Result<(), String> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    run_game_loop(config, &mut input, &mut output)?;
    Ok(())
}

fn run_game_loop<R: BufRead, W: Write>(
    config: &ClientConfig,
    input: &mut R,
    output: &mut W,
) -> Result<GameStatus, String> {
    let mut state = TicTacToeGameState::new();

    if config.show_instructions {
        write!(output, "{}", ui::instructions()).map_err(io_err)?;
    }

    log!("Game started, human plays X and moves first");

    while state.status == GameStatus::InProgress {
        if state.current_mark == Mark::X {
            if !prompt_human_move(&mut state, input, output)? {
                continue;
            }
        } else {
            play_bot_move(&mut state, output)?;
        }

        writeln!(output, "\nCurrent board state:\n").map_err(io_err)?;
        write!(
            output,
            "{}",
            ui::render_board(&state.board, config.empty_cell_glyph)
        )
        .map_err(io_err)?;
    }

    let message = ui::outcome_message(state.status);
    writeln!(output, "\n{}", message).map_err(io_err)?;
    log!("Game finished: {}", message);

    if config.log_final_board {
        log!(
            "Final board:\n{}",
            ui::render_board(&state.board, config.empty_cell_glyph)
        );
    }

    Ok(state.status)
}

/// Reads and applies one human move. Returns `Ok(false)` when the input was
/// rejected, so the caller loops again without the turn having been consumed.
fn prompt_human_move<R: BufRead, W: Write>(
    state: &mut TicTacToeGameState,
    input: &mut R,
    output: &mut W,
) -> Result<bool, String> {
    write!(output, "Your turn (choose a number 1-9): ").map_err(io_err)?;
    output.flush().map_err(io_err)?;

    let mut line = String::new();
    let bytes_read = input.read_line(&mut line).map_err(io_err)?;
    if bytes_read == 0 {
        return Err("Input closed before the game finished".to_string());
    }

    let pos = match ui::parse_cell_input(&line) {
        Ok(pos) => pos,
        Err(message) => {
            writeln!(output, "{}. Try again.", message).map_err(io_err)?;
            return Ok(false);
        }
    };

    if let Err(message) = state.place_mark(pos) {
        writeln!(output, "Invalid move: {}. Try again.", message).map_err(io_err)?;
        return Ok(false);
    }

    Ok(true)
}

fn play_bot_move<W: Write>(state: &mut TicTacToeGameState, output: &mut W) -> Result<(), String> {
    let pos = find_best_move(&mut state.board, Mark::O)
        .ok_or_else(|| "No move available for the computer".to_string())?;

    state.place_mark(pos)?;
    writeln!(output, "Computer plays cell {}.", pos.to_index() + 1).map_err(io_err)
}

fn io_err(err: io::Error) -> String {
    format!("I/O error: {}", err)
}
