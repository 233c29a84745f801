// Copyright 2025 the Kdplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kdplane_index::{Point, PointSet, Rect, SpatialIndex};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn gen_uniform_points(count: usize, seed: u64) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| Point::new(rng.r#gen::<f64>(), rng.r#gen::<f64>()))
        .collect()
}

fn gen_clustered_points(n_clusters: usize, per_cluster: usize, spread: f64) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(0xC1A5_7E55_9999_ABCD);
    let mut out = Vec::with_capacity(n_clusters * per_cluster);
    for _ in 0..n_clusters {
        let (cx, cy) = (rng.r#gen::<f64>(), rng.r#gen::<f64>());
        for _ in 0..per_cluster {
            let dx = (rng.r#gen::<f64>() - 0.5) * spread;
            let dy = (rng.r#gen::<f64>() - 0.5) * spread;
            out.push(Point::new(cx + dx, cy + dy));
        }
    }
    out
}

/// Strictly increasing coordinates: the 2-d tree degenerates to a path.
fn gen_diagonal_points(count: usize) -> Vec<Point> {
    (0..count)
        .map(|i| {
            let v = i as f64 / count as f64;
            Point::new(v, v)
        })
        .collect()
}

fn build_kd(points: &[Point]) -> SpatialIndex {
    SpatialIndex::try_from_points(points.iter().copied()).unwrap()
}

fn build_brute(points: &[Point]) -> PointSet {
    PointSet::try_from_points(points.iter().copied()).unwrap()
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    for &n in &[1_000usize, 10_000, 100_000] {
        let points = gen_uniform_points(n, 0xCAFE_F00D_DEAD_BEEF);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("kd_tree_n{n}"), |b| {
            b.iter_batched(
                SpatialIndex::new,
                |mut idx| {
                    for p in points.iter().copied() {
                        let _ = idx.insert(p);
                    }
                    black_box(idx.len());
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_function(format!("brute_force_n{n}"), |b| {
            b.iter_batched(
                PointSet::new,
                |mut idx| {
                    for p in points.iter().copied() {
                        let _ = idx.insert(p);
                    }
                    black_box(idx.len());
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_nearest(c: &mut Criterion) {
    let mut group = c.benchmark_group("nearest");
    let queries = gen_uniform_points(256, 0xFACE_FEED_CAFE_BABE);
    for &n in &[1_000usize, 10_000, 100_000] {
        let points = gen_uniform_points(n, 0xCAFE_F00D_DEAD_BEEF);
        let kd = build_kd(&points);
        group.throughput(Throughput::Elements(queries.len() as u64));
        group.bench_function(format!("kd_tree_n{n}"), |b| {
            b.iter(|| {
                for q in &queries {
                    black_box(kd.nearest(*q).unwrap());
                }
            })
        });
        // The linear scan gets slow quickly; keep it to the smaller sizes.
        if n <= 10_000 {
            let brute = build_brute(&points);
            group.bench_function(format!("brute_force_n{n}"), |b| {
                b.iter(|| {
                    for q in &queries {
                        black_box(brute.nearest(*q).unwrap());
                    }
                })
            });
        }
    }
    group.finish();
}

fn bench_range(c: &mut Criterion) {
    let mut group = c.benchmark_group("range");
    let points = gen_uniform_points(10_000, 0xCAFE_F00D_DEAD_BEEF);
    let kd = build_kd(&points);
    let brute = build_brute(&points);
    for &side in &[0.01_f64, 0.1, 0.5] {
        let rect = Rect::new(0.25, 0.25, 0.25 + side, 0.25 + side).unwrap();
        group.bench_function(format!("kd_tree_side{side}"), |b| {
            b.iter(|| black_box(kd.range(rect).count()))
        });
        group.bench_function(format!("brute_force_side{side}"), |b| {
            b.iter(|| black_box(brute.range(rect).count()))
        });
    }
    group.finish();
}

fn bench_clustered(c: &mut Criterion) {
    let mut group = c.benchmark_group("clustered");
    let points = gen_clustered_points(16, 1024, 0.05);
    let queries = gen_uniform_points(256, 0xBADC_F00D_1234_5678);
    group.bench_function("kd_tree_build_then_nearest", |b| {
        b.iter_batched(
            || points.clone(),
            |points| {
                let kd = build_kd(&points);
                let mut total = 0.0;
                for q in &queries {
                    if let Ok(Some((_, d))) = kd.nearest_with_distance(*q) {
                        total += d;
                    }
                }
                black_box(total);
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_degenerate(c: &mut Criterion) {
    let mut group = c.benchmark_group("degenerate_diagonal");
    let points = gen_diagonal_points(2_000);
    let kd = build_kd(&points);
    let brute = build_brute(&points);
    let q = Point::new(0.5, 0.25);
    group.bench_function("kd_tree_nearest", |b| {
        b.iter(|| black_box(kd.nearest(q).unwrap()))
    });
    group.bench_function("brute_force_nearest", |b| {
        b.iter(|| black_box(brute.nearest(q).unwrap()))
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_build,
    bench_nearest,
    bench_range,
    bench_clustered,
    bench_degenerate,
);
criterion_main!(benches);
