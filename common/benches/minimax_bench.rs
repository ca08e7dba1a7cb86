use std::time::Duration;

use criterion::{Criterion, SamplingMode, criterion_group, criterion_main};

use common::games::tictactoe::{Board, Mark, Position, find_best_move, has_three_in_a_row};

fn bench_best_move_empty_board() {
    let mut board = Board::new();
    find_best_move(&mut board, Mark::O);
}

fn bench_best_move_mid_game() {
    let mut board = Board::new();
    let moves = [
        (0, 0, Mark::X),
        (1, 1, Mark::O),
        (2, 2, Mark::X),
        (0, 2, Mark::O),
    ];
    for (row, col, mark) in moves {
        board.set(Position::new(row, col), mark);
    }

    find_best_move(&mut board, Mark::X);
}

fn bench_full_self_play() {
    let mut board = Board::new();
    let mut current = Mark::X;

    while board.has_empty_cell() && !has_three_in_a_row(&board) {
        if let Some(pos) = find_best_move(&mut board, current) {
            board.set(pos, current);
            current = current.opponent().unwrap();
        } else {
            break;
        }
    }
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");

    group
        .sampling_mode(SamplingMode::Flat)
        .sample_size(20)
        .measurement_time(Duration::from_secs(20));

    group.bench_function("best_move_empty_board", |b| {
        b.iter(bench_best_move_empty_board)
    });

    group.bench_function("best_move_mid_game", |b| b.iter(bench_best_move_mid_game));

    group.bench_function("full_self_play", |b| b.iter(bench_full_self_play));

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
