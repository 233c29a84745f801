// Copyright 2025 the Kdplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visible-point example: query the index with a scrolling Kurbo viewport.
//!
//! Run:
//! - `cargo run -p kdplane_demos --example kurbo_viewport`

use kdplane_index::{Point, Rect, SpatialIndex};

const SPACING: f64 = 20.0;
const WIDTH: f64 = 200.0;

fn main() {
    let mut idx = SpatialIndex::new();
    // A column of markers, one every SPACING units, with a little horizontal wobble.
    for i in 0..1000_u32 {
        let y = f64::from(i) * SPACING;
        let x = WIDTH / 2.0 + (f64::from(i % 7) - 3.0) * 10.0;
        let _ = idx.insert(Point::from(kurbo::Point::new(x, y)));
    }

    // Simulate a few scroll positions by moving the viewport rectangle.
    for scroll in [0.0, 30.0, 200.0, 600.0] {
        let viewport = kurbo::Rect::new(0.0, scroll, WIDTH, scroll + 100.0);
        let Ok(rect) = Rect::try_from(viewport) else {
            continue;
        };
        let mut visible: Vec<_> = idx.range(rect).map(kurbo::Point::from).collect();
        visible.sort_by(|a, b| a.y.total_cmp(&b.y));
        let rows: Vec<_> = visible.iter().map(|p| (p.y / SPACING) as u32).collect();
        println!("scroll={scroll:.1} -> visible rows: {rows:?}");
    }

    // Snap a pointer to the closest marker.
    let pointer = kurbo::Point::new(40.0, 415.0);
    if let Ok(Some(p)) = idx.nearest(pointer.into()) {
        let snapped = kurbo::Point::from(p);
        println!("pointer {pointer:?} snaps to {snapped:?}");
    }
}
