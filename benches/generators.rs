use criterion::{criterion_group, criterion_main, Criterion};
use mazes::{
    generators,
    grid::MazeGrid,
    units::{Height, Width},
};

fn bench_recursive_backtracker_maze_31(c: &mut Criterion) {
    let mut rng = generators::seeded_rng(Some(31));
    c.bench_function("recursive_backtracker_maze_31", move |b| {
        b.iter(|| {
            let mut g = MazeGrid::new(Width(31), Height(31)).unwrap();
            generators::recursive_backtracker(&mut g, &mut rng);
            g
        })
    });
}

fn bench_recursive_backtracker_maze_351(c: &mut Criterion) {
    let mut rng = generators::seeded_rng(Some(351));
    c.bench_function("recursive_backtracker_maze_351", move |b| {
        b.iter(|| {
            let mut g = MazeGrid::new(Width(351), Height(351)).unwrap();
            generators::recursive_backtracker(&mut g, &mut rng);
            g
        })
    });
}

criterion_group!(
    benches,
    bench_recursive_backtracker_maze_31,
    bench_recursive_backtracker_maze_351
);
criterion_main!(benches);
