// Copyright 2025 the Kdplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend trait for point storage strategies.

use alloc::boxed::Box;

use crate::types::{Point, Rect};

/// Point storage strategy used by `IndexGeneric`.
///
/// Backends receive arguments that have already been validated: points are finite and
/// lie within [`Backend::bounds`].
pub trait Backend {
    /// Region of the plane this backend accepts points from.
    fn bounds(&self) -> Rect;

    /// Number of distinct points stored.
    fn len(&self) -> usize;

    /// Store `p`. Returns `false` if an equal point was already present.
    fn insert(&mut self, p: Point) -> bool;

    /// Whether a point equal to `p` is stored.
    fn contains(&self, p: Point) -> bool;

    /// Stored points inside `rect` (inclusive), each exactly once.
    fn query_rect<'a>(&'a self, rect: Rect) -> Box<dyn Iterator<Item = Point> + 'a>;

    /// Stored point closest to `p` together with its squared distance, or `None` if empty.
    fn nearest(&self, p: Point) -> Option<(Point, f64)>;

    /// Every stored point exactly once.
    fn points<'a>(&'a self) -> Box<dyn Iterator<Item = Point> + 'a>;

    /// Remove all points.
    fn clear(&mut self);
}
