use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use chroma_board::board::validate;
use chroma_board::traits::RecordingSink;
use chroma_board::{BoardCell, BoardGame, Camera, CameraConfig, Category, GameConfig, GroundIntersector, Preset};

/// Spread of pixels over the reference canvas
fn sample_pixels() -> Vec<(f32, f32)> {
    (0..16)
        .flat_map(|i| (0..9).map(move |j| (i as f32 * 80.0, j as f32 * 80.0)))
        .collect()
}

fn bench_ground_intersection(c: &mut Criterion) {
    let camera = Camera::new(CameraConfig::default()).unwrap();
    let rays: Vec<_> = sample_pixels()
        .into_iter()
        .map(|(x, y)| camera.cast_ray(x, y))
        .collect();

    let mut group = c.benchmark_group("ground_intersection");
    for (name, intersector) in [
        ("marching", GroundIntersector::default()),
        ("exact", GroundIntersector::Exact),
    ] {
        group.bench_with_input(BenchmarkId::new(name, rays.len()), &rays, |b, rays| {
            b.iter(|| {
                rays.iter()
                    .filter_map(|ray| intersector.intersect(black_box(ray)))
                    .count()
            })
        });
    }
    group.finish();
}

fn bench_validate(c: &mut Criterion) {
    let board = Preset::NearSolved.board().unwrap();
    c.bench_function("validate_full_scan", |b| {
        b.iter(|| {
            (0..9)
                .flat_map(|row| (0..9).map(move |col| BoardCell::new(row, col)))
                .flat_map(|cell| Category::all().map(move |category| (cell, category)))
                .filter(|&(cell, category)| validate(black_box(&board), cell, category))
                .count()
        })
    });
}

fn bench_handle_click(c: &mut Criterion) {
    let config = GameConfig {
        preset: Preset::Challenging,
        ..GameConfig::default()
    };
    c.bench_function("handle_click_center", |b| {
        b.iter_batched(
            || (BoardGame::new(&config).unwrap(), RecordingSink::new()),
            |(mut game, mut sink)| game.handle_click(black_box(639.5), black_box(359.5), &mut sink),
            criterion::BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_ground_intersection, bench_validate, bench_handle_click);
criterion_main!(benches);
