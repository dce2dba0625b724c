use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use common::games::tictactoe::{Board, Mark, Player, compute_computer_move};

fn bench_minimax_self_play() {
    let mut board = Board::new();
    let mut current = Player::X;

    while let Some(index) = compute_computer_move(&board, current, current.opponent()) {
        if board.apply(index, current).is_err() {
            break;
        }
        current = current.opponent();
    }
}

fn bench_minimax_single_move_empty_board() {
    let board = Board::new();
    black_box(compute_computer_move(black_box(&board), Player::X, Player::O));
}

fn bench_minimax_single_move_mid_game() {
    let board = Board::from_cells([
        Mark::X, Mark::Empty, Mark::Empty,
        Mark::Empty, Mark::O, Mark::Empty,
        Mark::Empty, Mark::Empty, Mark::X,
    ]);
    black_box(compute_computer_move(black_box(&board), Player::O, Player::X));
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");

    group.sample_size(20);

    group.bench_function("self_play", |b| b.iter(bench_minimax_self_play));

    group.bench_function("single_move_empty", |b| {
        b.iter(bench_minimax_single_move_empty_board)
    });

    group.bench_function("single_move_mid_game", |b| {
        b.iter(bench_minimax_single_move_mid_game)
    });

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
