//! Criterion benchmarks for the hull pipeline.
//! Focus sizes: n in {16, 64, 256, 1024}.
//! Results land under target/criterion by default.

use anglehull::angle_hull::generate_angle_hull;
use anglehull::convex::ConvexHull;
use anglehull::geometry::{Angle, Point};
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_points(n: usize, seed: u64) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| Point::new(rng.gen_range(0..2000), rng.gen_range(0..2000)))
        .collect()
}

fn bench_hull(c: &mut Criterion) {
    let mut group = c.benchmark_group("hull");
    for &n in &[16usize, 64, 256, 1024] {
        group.bench_with_input(BenchmarkId::new("setup", n), &n, |b, &n| {
            b.iter_batched(
                || random_points(n, 43),
                |pts| {
                    let _hull = ConvexHull::setup(&pts);
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("update_one_moved", n), &n, |b, &n| {
            let base = random_points(n, 44);
            let hull = ConvexHull::setup(&base);
            let mut moved = base.clone();
            moved[0] = Point::new(-10, -10);
            b.iter(|| {
                let _next = hull.update(&moved);
            })
        });

        group.bench_with_input(BenchmarkId::new("angle_hull_90deg", n), &n, |b, &n| {
            let hull = ConvexHull::setup(&random_points(n, 45));
            let alpha = Angle::from_deg(90.0);
            b.iter(|| {
                let _arcs = generate_angle_hull(&hull, alpha);
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_hull);
criterion_main!(benches);
