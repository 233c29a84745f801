// Copyright 2025 the Kdplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Basic usage of Kdplane Index: insert, range query, nearest neighbor.

use kdplane_index::{Point, Rect, SpatialIndex};

fn main() {
    let mut idx = SpatialIndex::new();
    for (x, y) in [(0.7, 0.2), (0.5, 0.4), (0.2, 0.3), (0.4, 0.7), (0.9, 0.6)] {
        let _ = idx.insert(Point::new(x, y));
    }
    println!("{} points, tree height {}", idx.len(), idx.height());

    let rect = Rect::new(0.3, 0.1, 0.8, 0.5).unwrap();
    let hits: Vec<_> = idx.range(rect).collect();
    println!("points in {rect:?}: {hits:?}");

    let nearest = idx.nearest(Point::new(0.3, 0.8)).unwrap();
    println!("nearest to (0.3, 0.8): {nearest:?}");
}
