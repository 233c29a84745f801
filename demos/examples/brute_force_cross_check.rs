// Copyright 2025 the Kdplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cross-check the 2-d tree against the brute-force set on random points.
//!
//! Run:
//! - `cargo run -p kdplane_demos --example brute_force_cross_check`

use kdplane_index::{Point, PointSet, Rect, SpatialIndex};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn main() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut kd = SpatialIndex::new();
    let mut brute = PointSet::new();
    for _ in 0..10_000 {
        let p = Point::new(rng.r#gen::<f64>(), rng.r#gen::<f64>());
        let _ = kd.insert(p);
        let _ = brute.insert(p);
    }
    println!("{} points, tree height {}", kd.len(), kd.height());

    let mut mismatches = 0;
    for _ in 0..100 {
        let q = Point::new(rng.r#gen::<f64>(), rng.r#gen::<f64>());
        let kd_d = kd.nearest_with_distance(q).ok().flatten().map(|(_, d)| d);
        let brute_d = brute.nearest_with_distance(q).ok().flatten().map(|(_, d)| d);
        if kd_d != brute_d {
            mismatches += 1;
            println!("nearest mismatch at {q:?}: {kd_d:?} vs {brute_d:?}");
        }
    }

    for side in [0.01, 0.05, 0.2] {
        let rect = Rect::new(0.4, 0.4, 0.4 + side, 0.4 + side).unwrap();
        let mut got: Vec<_> = kd.range(rect).collect();
        got.sort();
        let want: Vec<_> = brute.range(rect).collect();
        println!("side {side}: {} points in range", got.len());
        if got != want {
            mismatches += 1;
            println!("range mismatch for side {side}");
        }
    }
    println!("{mismatches} mismatches");
}
