use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{template, Board, GameState, Piece};
use blockfall::term::{FrameBuffer, GameView, Viewport};
use blockfall::types::{GameAction, PieceKind};

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();

    c.bench_function("game_tick_16ms", |b| {
        b.iter(|| {
            if state.game_over() {
                state.start();
            }
            state.tick(black_box(16));
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for y in 16..20 {
                for x in 0..10 {
                    board.set(x, y, Some(PieceKind::I));
                }
            }
            board.clear_full_rows();
        })
    });
}

fn bench_collision(c: &mut Criterion) {
    let mut board = Board::new();
    for x in 0..9 {
        board.set(x, 19, Some(PieceKind::Z));
    }
    let shape = template(PieceKind::T);

    c.bench_function("collides", |b| {
        b.iter(|| board.collides(black_box(&shape), black_box(4), black_box(17)))
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();
    state.replace_active(Piece {
        x: 8,
        ..Piece::spawn(PieceKind::I)
    });

    c.bench_function("rotate_with_kick", |b| {
        b.iter(|| {
            state.apply_action(GameAction::Rotate);
        })
    });
}

fn bench_hard_drop_cycle(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();

    c.bench_function("hard_drop", |b| {
        b.iter(|| {
            if state.game_over() {
                state.start();
            }
            state.apply_action(GameAction::HardDrop);
        })
    });
}

fn bench_ghost(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();

    c.bench_function("ghost_y", |b| b.iter(|| black_box(state.ghost_y())));
}

fn bench_render(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();
    let snap = state.snapshot();
    let view = GameView::default();
    let viewport = Viewport::new(80, 24);
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);

    c.bench_function("render_into_80x24", |b| {
        b.iter(|| view.render_into(black_box(&snap), viewport, &mut fb))
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_collision,
    bench_rotate,
    bench_hard_drop_cycle,
    bench_ghost,
    bench_render
);
criterion_main!(benches);
