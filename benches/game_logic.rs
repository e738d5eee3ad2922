use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{get_shape, Board, GameState};
use blockfall::types::{Cell, ColorId, GameAction, ShapeKind};

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();

    c.bench_function("game_tick_16ms", |b| {
        b.iter(|| {
            state.tick(black_box(16));
            if state.game_over() {
                state.restart();
            }
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    let block = Cell::Color(ColorId::wrapping(0));

    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            // Fill bottom 4 rows
            for row in 16..20 {
                for col in 0..10 {
                    board.set(row, col, block);
                }
            }
            board.clear_full_lines()
        })
    });
}

fn bench_piece_spawn(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();

    c.bench_function("spawn_piece", |b| {
        b.iter(|| {
            if !state.spawn_next() {
                state.restart();
            }
        })
    });
}

fn bench_try_move(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.spawn(get_shape(ShapeKind::T), ColorId::wrapping(0));

    c.bench_function("try_move", |b| {
        b.iter(|| {
            state.apply_action(black_box(GameAction::MoveLeft));
            state.apply_action(black_box(GameAction::MoveRight));
        })
    });
}

fn bench_try_rotate(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.spawn(get_shape(ShapeKind::J), ColorId::wrapping(0));
    state.apply_action(GameAction::SoftDrop);

    c.bench_function("try_rotate", |b| {
        b.iter(|| {
            state.apply_action(black_box(GameAction::Rotate));
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_piece_spawn,
    bench_try_move,
    bench_try_rotate
);
criterion_main!(benches);
