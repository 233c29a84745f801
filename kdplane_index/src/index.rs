// Copyright 2025 the Kdplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public point-set API and generic implementation over a pluggable backend.

use crate::backend::Backend;
use crate::backends::brute::BruteForce;
use crate::backends::kd_tree::KdTree;
use crate::error::Error;
use crate::types::{Point, Rect};

/// A set of distinct points parameterized by a storage backend.
///
/// Every operation validates its point argument before the backend sees it:
/// non-finite points are rejected with [`Error::NonFinitePoint`], and inserting a point
/// outside [`bounds`](Self::bounds) fails with [`Error::OutOfBounds`].
/// A rejected call leaves the set untouched.
#[derive(Clone, Debug, Default)]
pub struct IndexGeneric<B: Backend> {
    backend: B,
}

impl<B: Backend + Default> IndexGeneric<B> {
    /// Create an empty set using the backend's default constructor.
    pub fn new() -> Self {
        Self {
            backend: B::default(),
        }
    }

    /// Build a set from points, failing on the first invalid one.
    pub fn try_from_points<I>(points: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = Point>,
    {
        let mut idx = Self::new();
        idx.try_extend(points)?;
        Ok(idx)
    }
}

impl<B: Backend> IndexGeneric<B> {
    /// Wrap an existing backend.
    pub fn from_backend(backend: B) -> Self {
        Self { backend }
    }

    /// The underlying backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Number of distinct points.
    pub fn len(&self) -> usize {
        self.backend.len()
    }

    /// Whether the set holds no points.
    pub fn is_empty(&self) -> bool {
        self.backend.len() == 0
    }

    /// Region points may be inserted into.
    pub fn bounds(&self) -> Rect {
        self.backend.bounds()
    }

    /// Insert `p`. Returns `Ok(false)` if an equal point was already present.
    pub fn insert(&mut self, p: Point) -> Result<bool, Error> {
        let p = p.validate()?;
        if !self.backend.bounds().contains(p) {
            return Err(Error::OutOfBounds { x: p.x(), y: p.y() });
        }
        Ok(self.backend.insert(p))
    }

    /// Insert points in order, stopping at the first invalid one.
    ///
    /// Points before the failing one stay inserted. Returns the number of points that
    /// were not already present.
    pub fn try_extend<I>(&mut self, points: I) -> Result<usize, Error>
    where
        I: IntoIterator<Item = Point>,
    {
        let mut added = 0;
        for p in points {
            if self.insert(p)? {
                added += 1;
            }
        }
        log::debug!("extended point set by {added}, now {} points", self.len());
        Ok(added)
    }

    /// Whether a point equal to `p` is present.
    pub fn contains(&self, p: Point) -> Result<bool, Error> {
        let p = p.validate()?;
        Ok(self.backend.contains(p))
    }

    /// Points inside `rect`, boundary included, each exactly once.
    ///
    /// The order depends on the backend.
    pub fn range(&self, rect: Rect) -> impl Iterator<Item = Point> + '_ {
        self.backend.query_rect(rect)
    }

    /// The point closest to `p`, or `None` if the set is empty.
    ///
    /// When several points are equally close, which one is returned depends on the backend.
    pub fn nearest(&self, p: Point) -> Result<Option<Point>, Error> {
        Ok(self.nearest_with_distance(p)?.map(|(q, _)| q))
    }

    /// Like [`nearest`](Self::nearest), also returning the squared distance to `p`.
    pub fn nearest_with_distance(&self, p: Point) -> Result<Option<(Point, f64)>, Error> {
        let p = p.validate()?;
        Ok(self.backend.nearest(p))
    }

    /// Every point exactly once.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.backend.points()
    }

    /// Remove all points.
    pub fn clear(&mut self) {
        self.backend.clear();
    }
}

/// Brute-force point set: ordered storage, linear-scan queries.
pub type PointSet = IndexGeneric<BruteForce>;

/// Spatial index over points backed by a 2-d tree.
pub type SpatialIndex = IndexGeneric<KdTree>;

impl SpatialIndex {
    /// Create an empty index accepting only points inside `bounds`.
    ///
    /// Tight bounds make the tree's rectangles tighter and so prune more.
    pub fn with_bounds(bounds: Rect) -> Self {
        Self::from_backend(KdTree::with_bounds(bounds))
    }

    /// Length of the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        self.backend.height()
    }
}
