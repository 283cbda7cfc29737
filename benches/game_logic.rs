use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gridfall::core::{Board, Session};
use gridfall::types::PieceKind;

fn bench_tick(c: &mut Criterion) {
    c.bench_function("session_tick", |b| {
        let mut session = Session::new(12345);
        b.iter(|| {
            if session.game_over() {
                session.restart();
            }
            black_box(session.tick());
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
            black_box(board.clear_full_rows());
        })
    });
}

fn bench_hard_drop(c: &mut Criterion) {
    c.bench_function("hard_drop", |b| {
        let mut session = Session::new(12345);
        b.iter(|| {
            if session.game_over() {
                session.restart();
            }
            black_box(session.hard_drop());
        })
    });
}

fn bench_move_and_rotate(c: &mut Criterion) {
    c.bench_function("move_and_rotate", |b| {
        let mut session = Session::new(12345);
        b.iter(|| {
            session.move_left();
            session.move_right();
            black_box(session.rotate());
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_hard_drop,
    bench_move_and_rotate
);
criterion_main!(benches);
