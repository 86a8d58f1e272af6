use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_pentomino::core::{shapes, Board, Session, SessionConfig};
use tui_pentomino::types::{PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};

fn bench_rotation(c: &mut Criterion) {
    c.bench_function("rotate_full_catalog", |b| {
        b.iter(|| {
            for kind in PieceKind::ALL {
                for r in 0..4 {
                    black_box(shapes::cells(kind, Rotation::from_index(r)));
                }
            }
        })
    });
}

fn bench_fits(c: &mut Criterion) {
    let mut board = Board::new(BOARD_WIDTH, BOARD_HEIGHT);
    board.place(PieceKind::I, Rotation::R90, 0, 0, 1);

    c.bench_function("fits_near_occupied_row", |b| {
        b.iter(|| {
            black_box(board.fits(PieceKind::I, Rotation::R90, black_box(5), black_box(0)));
        })
    });
}

fn bench_place_remove(c: &mut Criterion) {
    c.bench_function("place_then_remove", |b| {
        let mut board = Board::new(BOARD_WIDTH, BOARD_HEIGHT);
        b.iter(|| {
            board.place(PieceKind::X, Rotation::R0, 3, 1, 1);
            board.remove(1);
        })
    });
}

fn bench_session_tick(c: &mut Criterion) {
    // An effectively endless countdown so the tick keeps doing real work
    // (vanish churn included) instead of hitting the game-over early-out.
    let mut session = Session::new(
        SessionConfig {
            countdown_secs: u32::MAX,
            ..SessionConfig::default()
        },
        12345,
    );
    session.new_game();

    c.bench_function("session_tick_1s", |b| {
        b.iter(|| {
            session.tick();
            session.take_events();
        })
    });
}

criterion_group!(
    benches,
    bench_rotation,
    bench_fits,
    bench_place_remove,
    bench_session_tick
);
criterion_main!(benches);
