// Copyright 2025 the Kdplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Kdplane Index: 2D point sets with range and nearest-neighbor queries.
//!
//! Two structures share one API so their answers can be checked against each other:
//!
//! - [`SpatialIndex`]: a 2-d tree. Each level splits the plane alternately on x and y,
//!   and every node knows the rectangle its subtree occupies, so range and
//!   nearest-neighbor searches skip whole subtrees that cannot contribute.
//! - [`PointSet`]: an ordered set that answers the same queries by scanning every point.
//!   Use it as a reference, or for very small sets.
//!
//! Both are built incrementally with `insert`; points are never removed one at a time.
//! Duplicate points are ignored.
//!
//! # Example
//!
//! ```rust
//! use kdplane_index::{Point, Rect, SpatialIndex};
//!
//! let mut idx = SpatialIndex::new();
//! for (x, y) in [(0.1, 0.1), (0.9, 0.9), (0.1, 0.9), (0.9, 0.1), (0.5, 0.5)] {
//!     idx.insert(Point::new(x, y)).unwrap();
//! }
//!
//! // Axis-aligned range query; boundaries are inclusive.
//! let query = Rect::new(0.0, 0.0, 0.6, 0.6).unwrap();
//! let mut hits: Vec<_> = idx.range(query).collect();
//! hits.sort();
//! assert_eq!(hits, [Point::new(0.1, 0.1), Point::new(0.5, 0.5)]);
//!
//! // Nearest neighbor.
//! let nearest = idx.nearest(Point::new(0.45, 0.55)).unwrap();
//! assert_eq!(nearest, Some(Point::new(0.5, 0.5)));
//! ```
//!
//! Cross-checking against the brute-force set:
//!
//! ```rust
//! use kdplane_index::{Point, PointSet, SpatialIndex};
//!
//! let points: Vec<_> = (0..100)
//!     .map(|i| Point::new((i * 37 % 100) as f64 / 100.0, (i * 61 % 100) as f64 / 100.0))
//!     .collect();
//! let kd = SpatialIndex::try_from_points(points.iter().copied()).unwrap();
//! let brute = PointSet::try_from_points(points).unwrap();
//!
//! let q = Point::new(0.33, 0.71);
//! let (_, d_kd) = kd.nearest_with_distance(q).unwrap().unwrap();
//! let (_, d_brute) = brute.nearest_with_distance(q).unwrap().unwrap();
//! // Equidistant points may differ between the two, so compare distances.
//! assert!((d_kd - d_brute).abs() < 1e-12);
//! ```
//!
//! ## Errors
//!
//! Every failure is an invalid argument, reported as [`Error`]: a point with a NaN or
//! infinite coordinate, a rectangle with NaN or inverted bounds, or a point outside the
//! region of an index created with [`SpatialIndex::with_bounds`]. Nothing is logged or
//! retried; a rejected call leaves the structure unchanged.
//!
//! ## Shape and performance
//!
//! The tree is never rebalanced. Random insertion order gives expected logarithmic
//! depth; sorted input degenerates to a path and linear query time, but answers stay
//! correct.
//!
//! ## Features
//!
//! - `std` (default): enables `distance_to` helpers and `std::error::Error` integration.
//! - `kurbo`: conversions between [`Point`]/[`Rect`] and `kurbo::Point`/`kurbo::Rect`.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod backend;
pub mod backends;
pub mod error;
pub mod index;
#[cfg(feature = "kurbo")]
mod interop;
pub mod types;

pub use backend::Backend;
pub use backends::brute::BruteForce;
pub use backends::kd_tree::KdTree;
pub use error::Error;
pub use index::{IndexGeneric, PointSet, SpatialIndex};
pub use types::{Orientation, Point, Rect};
