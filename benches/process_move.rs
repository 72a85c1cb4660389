use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use dotlink::core::{Cell, Color, Grid, Palette, ScriptedSampler};
use dotlink::{BoardConfig, BoardEngine};

fn single_color(size: usize) -> BoardEngine<ScriptedSampler> {
    let grid = Grid::from_rows(vec![vec![Color(0); size]; size]).unwrap();
    BoardEngine::with_grid(grid, Palette::standard(4), u32::MAX, ScriptedSampler::constant(Color(0)))
        .unwrap()
}

fn bench_plain_move(c: &mut Criterion) {
    let path: Vec<Cell> = (0..6).map(|col| Cell::new(0, col)).collect();

    c.bench_function("plain_move_6", |b| {
        b.iter_batched(
            || single_color(6),
            |mut engine| engine.process_move(black_box(&path)),
            BatchSize::SmallInput,
        )
    });
}

fn bench_loop_move(c: &mut Criterion) {
    let path = [
        Cell::new(0, 0),
        Cell::new(0, 1),
        Cell::new(1, 1),
        Cell::new(1, 0),
        Cell::new(0, 0),
    ];

    c.bench_function("loop_move_flood_7x7", |b| {
        b.iter_batched(
            || single_color(7),
            |mut engine| engine.process_move(black_box(&path)),
            BatchSize::SmallInput,
        )
    });
}

fn bench_new_board(c: &mut Criterion) {
    let config = BoardConfig::default();

    c.bench_function("new_board_6x6", |b| {
        b.iter(|| BoardEngine::seeded(black_box(&config), 12345))
    });
}

criterion_group!(benches, bench_plain_move, bench_loop_move, bench_new_board);
criterion_main!(benches);
