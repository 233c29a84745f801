// Copyright 2025 the Kdplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The five-point layout: four corners and a center, queried on both structures.
//!
//! Run:
//! - `cargo run -p kdplane_demos --example basic_queries`

use kdplane_index::{Point, PointSet, Rect, SpatialIndex};

fn main() {
    let points: Vec<Point> = [(0.1, 0.1), (0.9, 0.9), (0.1, 0.9), (0.9, 0.1), (0.5, 0.5)]
        .into_iter()
        .map(Point::from)
        .collect();
    let kd = SpatialIndex::try_from_points(points.iter().copied()).unwrap();
    let brute = PointSet::try_from_points(points).unwrap();

    let rect = Rect::new(0.0, 0.0, 0.6, 0.6).unwrap();
    let mut kd_hits: Vec<_> = kd.range(rect).collect();
    kd_hits.sort();
    println!("kd-tree range:     {kd_hits:?}");
    println!("brute-force range: {:?}", brute.range(rect).collect::<Vec<_>>());

    let q = Point::new(0.45, 0.55);
    println!("kd-tree nearest:     {:?}", kd.nearest_with_distance(q));
    println!("brute-force nearest: {:?}", brute.nearest_with_distance(q));

    // Points are deduplicated.
    let mut kd = kd;
    let added = kd.insert(Point::new(0.5, 0.5));
    println!("re-insert center -> {added:?}, len {}", kd.len());
}
