// Copyright 2025 the Kdplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error type shared by both point structures.

use thiserror::Error;

/// Invalid-argument conditions reported by point structures and geometry constructors.
///
/// There is no other failure mode: every operation either succeeds or rejects its
/// argument before touching any state.
#[derive(Copy, Clone, Debug, PartialEq, Error)]
pub enum Error {
    /// A point argument has a NaN or infinite coordinate.
    #[error("point ({x}, {y}) has a non-finite coordinate")]
    NonFinitePoint {
        /// The x coordinate as given.
        x: f64,
        /// The y coordinate as given.
        y: f64,
    },

    /// Rectangle bounds are NaN or inverted.
    #[error("invalid rectangle [{min_x}, {max_x}] x [{min_y}, {max_y}]")]
    InvalidRect {
        /// Minimum x as given.
        min_x: f64,
        /// Minimum y as given.
        min_y: f64,
        /// Maximum x as given.
        max_x: f64,
        /// Maximum y as given.
        max_y: f64,
    },

    /// A point lies outside the region a bounded structure was created with.
    #[error("point ({x}, {y}) lies outside the index bounds")]
    OutOfBounds {
        /// The x coordinate as given.
        x: f64,
        /// The y coordinate as given.
        y: f64,
    },
}
