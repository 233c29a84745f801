// Copyright 2025 the Kdplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![cfg(feature = "compare_rstar")]

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kdplane_index::{Point, Rect, SpatialIndex};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use rstar::{AABB, RTree};

fn gen_uniform_points(count: usize, seed: u64) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| Point::new(rng.r#gen::<f64>(), rng.r#gen::<f64>()))
        .collect()
}

fn to_rstar_points(v: &[Point]) -> Vec<[f64; 2]> {
    v.iter().map(|p| [p.x(), p.y()]).collect()
}

fn bench_kdtree_external_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("kdtree_external_compare");
    let queries = gen_uniform_points(256, 0xFACE_FEED_CAFE_BABE);
    let query_rect = Rect::new(0.25, 0.25, 0.35, 0.35).unwrap();
    for &n in &[10_000usize, 100_000] {
        let points = gen_uniform_points(n, 0xCAFE_F00D_DEAD_BEEF);
        group.throughput(Throughput::Elements(n as u64));

        group.bench_function(format!("kdplane_build_query_n{n}"), |b| {
            b.iter_batched(
                SpatialIndex::new,
                |mut idx| {
                    for p in points.iter().copied() {
                        let _ = idx.insert(p);
                    }
                    let hits = idx.range(query_rect).count();
                    let mut found = 0;
                    for q in &queries {
                        if let Ok(Some(_)) = idx.nearest(*q) {
                            found += 1;
                        }
                    }
                    black_box((hits, found));
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("rstar_build_query_n{n}"), |b| {
            b.iter_batched(
                || to_rstar_points(&points),
                |pts| {
                    let mut tree = RTree::new();
                    for p in pts {
                        tree.insert(p);
                    }
                    let aabb = AABB::from_corners(
                        [query_rect.min_x(), query_rect.min_y()],
                        [query_rect.max_x(), query_rect.max_y()],
                    );
                    let hits = tree.locate_in_envelope(&aabb).count();
                    let mut found = 0;
                    for q in &queries {
                        if tree.nearest_neighbor(&[q.x(), q.y()]).is_some() {
                            found += 1;
                        }
                    }
                    black_box((hits, found));
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("rstar_bulk_build_query_n{n}"), |b| {
            b.iter_batched(
                || to_rstar_points(&points),
                |pts| {
                    let tree = RTree::bulk_load(pts);
                    let mut found = 0;
                    for q in &queries {
                        if tree.nearest_neighbor(&[q.x(), q.y()]).is_some() {
                            found += 1;
                        }
                    }
                    black_box(found);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_kdtree_external_compare);
criterion_main!(benches);
