// Copyright 2025 the Kdplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conversions to and from Kurbo geometry.

use crate::error::Error;
use crate::types::{Point, Rect};

impl From<kurbo::Point> for Point {
    fn from(p: kurbo::Point) -> Self {
        Self::new(p.x, p.y)
    }
}

impl From<Point> for kurbo::Point {
    fn from(p: Point) -> Self {
        Self::new(p.x(), p.y())
    }
}

/// Kurbo rectangles may have their corners in either order; they are normalized first.
impl TryFrom<kurbo::Rect> for Rect {
    type Error = Error;

    fn try_from(r: kurbo::Rect) -> Result<Self, Error> {
        Self::from_corners(Point::new(r.x0, r.y0), Point::new(r.x1, r.y1))
    }
}

impl From<Rect> for kurbo::Rect {
    fn from(r: Rect) -> Self {
        Self::new(r.min_x(), r.min_y(), r.max_x(), r.max_y())
    }
}
