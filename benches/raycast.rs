use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_raycast::core::{cast_ray, MovementConfig, Pose, Simulation, WorldGrid};
use tui_raycast::term::{FrameBuffer, SceneView};
use tui_raycast::types::{DEFAULT_MAP, SCREEN_WIDTH};

fn bench_single_cast(c: &mut Criterion) {
    let grid = WorldGrid::parse(&DEFAULT_MAP).unwrap();
    let pose = Pose::new(8.5, 8.5, 0.9);
    let config = MovementConfig::default();

    c.bench_function("cast_one_ray", |b| {
        b.iter(|| cast_ray(&grid, &pose, &config, black_box(60), SCREEN_WIDTH))
    });
}

fn bench_column_sweep(c: &mut Criterion) {
    let grid = WorldGrid::parse(&DEFAULT_MAP).unwrap();
    let pose = Pose::new(8.5, 8.5, 0.9);
    let config = MovementConfig::default();

    c.bench_function("cast_120_columns", |b| {
        b.iter(|| {
            for column in 0..SCREEN_WIDTH {
                black_box(cast_ray(&grid, &pose, &config, column, SCREEN_WIDTH));
            }
        })
    });
}

fn bench_full_frame(c: &mut Criterion) {
    let grid = WorldGrid::parse(&DEFAULT_MAP).unwrap();
    let sim = Simulation::new(grid, Pose::new(8.5, 8.5, 0.9), MovementConfig::default());
    let view = SceneView::default();
    let mut fb = FrameBuffer::new(view.width(), view.height());

    c.bench_function("render_full_frame", |b| {
        b.iter(|| view.render_into(&sim, black_box(0.016), &mut fb))
    });
}

criterion_group!(benches, bench_single_cast, bench_column_sweep, bench_full_frame);
criterion_main!(benches);
