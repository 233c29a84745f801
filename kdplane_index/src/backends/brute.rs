// Copyright 2025 the Kdplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordered-set backend with linear scans. Small and simple; the correctness oracle.

use alloc::boxed::Box;
use alloc::collections::BTreeSet;
use core::fmt::Debug;

use crate::backend::Backend;
use crate::types::{Point, Rect};

/// Ordered-set backend answering queries by scanning every point.
///
/// Points are kept in their natural order (y, then x), which is also the order
/// [`Backend::points`] and [`Backend::query_rect`] yield them in.
#[derive(Clone, Default)]
pub struct BruteForce {
    points: BTreeSet<Point>,
}

impl Debug for BruteForce {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BruteForce")
            .field("len", &self.points.len())
            .finish_non_exhaustive()
    }
}

impl Backend for BruteForce {
    fn bounds(&self) -> Rect {
        Rect::EVERYTHING
    }

    fn len(&self) -> usize {
        self.points.len()
    }

    fn insert(&mut self, p: Point) -> bool {
        self.points.insert(p)
    }

    fn contains(&self, p: Point) -> bool {
        self.points.contains(&p)
    }

    fn query_rect<'a>(&'a self, rect: Rect) -> Box<dyn Iterator<Item = Point> + 'a> {
        Box::new(self.points.iter().copied().filter(move |p| rect.contains(*p)))
    }

    fn nearest(&self, p: Point) -> Option<(Point, f64)> {
        let mut best: Option<(Point, f64)> = None;
        for q in self.points.iter().copied() {
            let d = q.distance_squared_to(&p);
            // Strict comparison keeps the first minimum in iteration order.
            if best.is_none_or(|(_, bd)| d < bd) {
                best = Some((q, d));
            }
        }
        best
    }

    fn points<'a>(&'a self) -> Box<dyn Iterator<Item = Point> + 'a> {
        Box::new(self.points.iter().copied())
    }

    fn clear(&mut self) {
        self.points.clear();
    }
}
