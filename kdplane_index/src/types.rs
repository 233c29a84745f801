// Copyright 2025 the Kdplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Primitive geometry types: points, axis-aligned rectangles, and split orientation.

use core::cmp::Ordering;

use crate::error::Error;

/// An immutable point in the plane.
///
/// Points compare equal when both coordinates are exactly equal. The total order
/// ([`Ord`]) is by `y` first, then by `x`; it is the order the brute-force set keeps
/// its points in and plays no part in k-d tree routing.
///
/// Construction through [`Point::new`] never fails. Every structure operation checks
/// that its point argument is finite before touching the structure, so a `Point` with
/// a NaN coordinate can be built but never stored.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Create a point from its coordinates.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Create a point, rejecting NaN or infinite coordinates.
    pub fn try_new(x: f64, y: f64) -> Result<Self, Error> {
        Self::new(x, y).validate()
    }

    /// The x coordinate.
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// The y coordinate.
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// Whether both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Squared Euclidean distance to `other`.
    #[inline]
    pub fn distance_squared_to(&self, other: &Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Euclidean distance to `other`.
    #[cfg(feature = "std")]
    pub fn distance_to(&self, other: &Self) -> f64 {
        self.distance_squared_to(other).sqrt()
    }

    pub(crate) fn validate(self) -> Result<Self, Error> {
        if self.is_finite() {
            Ok(self)
        } else {
            Err(Error::NonFinitePoint {
                x: self.x,
                y: self.y,
            })
        }
    }
}

// Structures only hold finite points, where `==` on f64 is reflexive.
impl Eq for Point {}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_f64(self.y, other.y).then_with(|| cmp_f64(self.x, other.x))
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

/// An immutable axis-aligned rectangle with inclusive boundaries.
///
/// Bounds always satisfy `min_x <= max_x` and `min_y <= max_y`, and are never NaN.
/// Infinite bounds are allowed; [`Rect::EVERYTHING`] covers the whole plane.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rect {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
}

impl Rect {
    /// The entire plane.
    pub const EVERYTHING: Self = Self::from_bounds(
        f64::NEG_INFINITY,
        f64::NEG_INFINITY,
        f64::INFINITY,
        f64::INFINITY,
    );

    /// The unit square `[0, 1] x [0, 1]`.
    pub const UNIT: Self = Self::from_bounds(0.0, 0.0, 1.0, 1.0);

    /// Create a rectangle from its min/max corners.
    ///
    /// Fails with [`Error::InvalidRect`] if a bound is NaN or a minimum exceeds its maximum.
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Result<Self, Error> {
        // Written so that NaN on either side fails the check.
        let ordered = min_x <= max_x && min_y <= max_y;
        if ordered {
            Ok(Self::from_bounds(min_x, min_y, max_x, max_y))
        } else {
            Err(Error::InvalidRect {
                min_x,
                min_y,
                max_x,
                max_y,
            })
        }
    }

    /// Create a rectangle from two opposite corners given in any order.
    pub fn from_corners(a: Point, b: Point) -> Result<Self, Error> {
        // `f64::min`/`max` would silently drop a NaN.
        if [a.x, a.y, b.x, b.y].iter().any(|v| v.is_nan()) {
            return Err(Error::InvalidRect {
                min_x: a.x,
                min_y: a.y,
                max_x: b.x,
                max_y: b.y,
            });
        }
        Self::new(
            a.x.min(b.x),
            a.y.min(b.y),
            a.x.max(b.x),
            a.y.max(b.y),
        )
    }

    const fn from_bounds(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Minimum x (left).
    pub const fn min_x(&self) -> f64 {
        self.min_x
    }

    /// Minimum y (bottom).
    pub const fn min_y(&self) -> f64 {
        self.min_y
    }

    /// Maximum x (right).
    pub const fn max_x(&self) -> f64 {
        self.max_x
    }

    /// Maximum y (top).
    pub const fn max_y(&self) -> f64 {
        self.max_y
    }

    /// Width along x.
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Height along y.
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Whether `p` lies inside or on the boundary.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.min_x <= p.x && p.x <= self.max_x && self.min_y <= p.y && p.y <= self.max_y
    }

    /// Whether the two rectangles share at least one point. Touching edges count.
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        self.min_x <= other.max_x
            && other.min_x <= self.max_x
            && self.min_y <= other.max_y
            && other.min_y <= self.max_y
    }

    /// Squared distance from `p` to the closest point of the rectangle; zero when inside.
    #[inline]
    pub fn distance_squared_to(&self, p: Point) -> f64 {
        let dx = axis_gap(p.x, self.min_x, self.max_x);
        let dy = axis_gap(p.y, self.min_y, self.max_y);
        dx * dx + dy * dy
    }

    /// Distance from `p` to the closest point of the rectangle; zero when inside.
    #[cfg(feature = "std")]
    pub fn distance_to(&self, p: Point) -> f64 {
        self.distance_squared_to(p).sqrt()
    }

    /// Split along `orientation` through `at`, returning the lower and upper halves.
    ///
    /// The lower half is left of (or below) the splitting line, the upper half right of
    /// (or above) it. Both halves keep the splitting line as a shared edge.
    pub(crate) fn split(&self, orientation: Orientation, at: Point) -> (Self, Self) {
        match orientation {
            Orientation::Vertical => (
                Self::from_bounds(self.min_x, self.min_y, at.x, self.max_y),
                Self::from_bounds(at.x, self.min_y, self.max_x, self.max_y),
            ),
            Orientation::Horizontal => (
                Self::from_bounds(self.min_x, self.min_y, self.max_x, at.y),
                Self::from_bounds(self.min_x, at.y, self.max_x, self.max_y),
            ),
        }
    }
}

impl Default for Rect {
    fn default() -> Self {
        Self::EVERYTHING
    }
}

/// Which axis a k-d tree level splits on.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// A vertical splitting line: points are routed by their x coordinate.
    Vertical,
    /// A horizontal splitting line: points are routed by their y coordinate.
    Horizontal,
}

impl Orientation {
    /// Orientation of the root level.
    pub const ROOT: Self = Self::Vertical;

    /// The orientation of the next level down.
    #[inline]
    pub const fn flip(self) -> Self {
        match self {
            Self::Vertical => Self::Horizontal,
            Self::Horizontal => Self::Vertical,
        }
    }

    /// The coordinate of `p` this orientation compares on.
    #[inline]
    pub const fn coord(self, p: Point) -> f64 {
        match self {
            Self::Vertical => p.x,
            Self::Horizontal => p.y,
        }
    }
}

fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

#[inline]
fn axis_gap(v: f64, min: f64, max: f64) -> f64 {
    if v < min {
        min - v
    } else if v > max {
        v - max
    } else {
        0.0
    }
}
